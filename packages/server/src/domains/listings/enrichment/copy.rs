//! Display copy: descriptions, urgency messages, badges and lodging type.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const URGENCY_PROBABILITY: f64 = 0.45;
const MAX_BADGES: usize = 2;

/// Mood a generated description is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    City,
    Nature,
    Emotional,
    Business,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::City, Theme::Nature, Theme::Emotional, Theme::Business];

    pub fn sentences(self) -> &'static [&'static str] {
        match self {
            Theme::City => &[
                "도심 한가운데 위치해 주요 관광지와 맛집을 도보로 즐길 수 있습니다.",
                "대중교통 접근성이 뛰어나 어디든 편하게 이동할 수 있는 숙소입니다.",
                "창밖으로 펼쳐지는 도시의 야경이 특별한 밤을 선사합니다.",
                "쇼핑가와 카페 거리가 가까워 여행의 즐거움이 두 배가 됩니다.",
            ],
            Theme::Nature => &[
                "푸른 자연에 둘러싸여 일상의 소음에서 벗어날 수 있는 곳입니다.",
                "아침이면 새소리와 함께 상쾌한 공기로 하루를 시작할 수 있습니다.",
                "가까운 산책로를 따라 계절마다 달라지는 풍경을 만나보세요.",
                "탁 트인 전망과 함께 별이 쏟아지는 밤하늘을 감상할 수 있습니다.",
            ],
            Theme::Emotional => &[
                "따뜻한 조명과 아늑한 인테리어가 마음까지 편안하게 해줍니다.",
                "소중한 사람과 잊지 못할 추억을 만들기에 더없이 좋은 공간입니다.",
                "정성스럽게 꾸며진 공간에서 느긋한 휴식을 누려보세요.",
                "머무는 순간마다 감성이 채워지는 특별한 숙소입니다.",
            ],
            Theme::Business => &[
                "빠른 와이파이와 업무 공간이 마련되어 출장객에게 안성맞춤입니다.",
                "주요 업무 지구와 가까워 효율적인 일정 관리가 가능합니다.",
                "조용한 객실에서 업무와 휴식을 모두 챙길 수 있습니다.",
                "역과 공항 접근성이 좋아 바쁜 일정에도 부담이 없습니다.",
            ],
        }
    }
}

const CLOSING_SENTENCES: &[&str] = &[
    "편안한 휴식을 원하신다면 지금 바로 예약하세요.",
    "친절한 호스트가 여러분의 방문을 기다리고 있습니다.",
    "깨끗하게 관리된 객실에서 기분 좋은 하루를 보내세요.",
    "다시 찾고 싶은 숙소로 기억될 것입니다.",
];

const URGENCY_MESSAGES: &[&str] = &[
    "오늘 이 숙소를 5명이 보고 있어요",
    "최근 24시간 동안 3건 예약되었어요",
    "선택하신 날짜에 남은 객실이 얼마 없어요",
    "이 가격은 곧 마감될 수 있어요",
    "인기 숙소! 빠르게 예약이 마감되고 있어요",
];

const BADGES: [&str; 4] = ["슈퍼호스트", "무료 취소", "즉시 예약", "게스트 선호"];

/// Kind of lodging shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HotelType {
    #[serde(rename = "호텔")]
    Hotel,
    #[serde(rename = "리조트")]
    Resort,
    #[serde(rename = "펜션")]
    Pension,
    #[serde(rename = "한옥")]
    Hanok,
    #[serde(rename = "게스트하우스")]
    GuestHouse,
    #[serde(rename = "모텔")]
    Motel,
    #[serde(rename = "캠핑")]
    Camping,
}

impl HotelType {
    pub const ALL: [HotelType; 7] = [
        HotelType::Hotel,
        HotelType::Resort,
        HotelType::Pension,
        HotelType::Hanok,
        HotelType::GuestHouse,
        HotelType::Motel,
        HotelType::Camping,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(HotelType::Hotel)
    }
}

/// One themed sentence followed by one closing sentence.
pub fn description<R: Rng + ?Sized>(rng: &mut R) -> String {
    let theme = Theme::ALL.choose(rng).copied().unwrap_or(Theme::City);
    let opening = pick(theme.sentences(), rng);
    let closing = pick(CLOSING_SENTENCES, rng);
    format!("{} {}", opening, closing)
}

pub fn urgency_message<R: Rng + ?Sized>(rng: &mut R) -> Option<String> {
    if rng.gen_bool(URGENCY_PROBABILITY) {
        Some(pick(URGENCY_MESSAGES, rng).to_string())
    } else {
        None
    }
}

/// Zero to two distinct badges.
pub fn badges<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(0..=MAX_BADGES);
    BADGES
        .choose_multiple(rng, count)
        .map(|badge| badge.to_string())
        .collect()
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
