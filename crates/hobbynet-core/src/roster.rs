//! Seeded demo roster: forty people with randomized hobby profiles.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::profile::{AttributeProfile, EatingHabit, Food, Lifestyle, OutdoorIndoor};
use crate::types::Entity;

/// Display names of the demo roster, in id order starting at 1.
pub const ROSTER_NAMES: [&str; 40] = [
    "田中", "佐藤", "鈴木", "山田", "伊藤", "渡辺", "加藤", "吉田", "山本", "中村",
    "小林", "斎藤", "高橋", "森", "池田", "橋本", "木村", "林", "清水", "山口",
    "村上", "近藤", "石川", "前田", "藤田", "後藤", "遠藤", "青木", "坂本", "久保",
    "松本", "井上", "野口", "菅原", "新井", "小川", "岡田", "原田", "荒木", "横山",
];

pub const GAMES: [&str; 6] = ["ゼルダ", "FF14", "原神", "ポケモン", "スプラトゥーン", "モンハン"];

pub const ANIME: [&str; 6] = [
    "鬼滅の刃", "SPY×FAMILY", "推しの子", "チェンソーマン", "進撃の巨人", "ブルーロック",
];

pub const MANGA: [&str; 6] = [
    "ワンピース", "チェンソーマン", "ブルーロック", "呪術廻戦", "キングダム", "葬送のフリーレン",
];

/// Generate the demo roster. The same seed always yields the same people.
pub fn sample_roster(seed: u64) -> Vec<Entity> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ROSTER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Entity::new(i as u64 + 1, *name, random_profile(&mut rng)))
        .collect()
}

fn random_profile<R: Rng>(rng: &mut R) -> AttributeProfile {
    let games = pick(rng, &GAMES, 1, 2);
    let anime = pick(rng, &ANIME, 1, 2);
    let manga = pick(rng, &MANGA, 1, 2);
    let foods = pick(rng, Food::VALUES, 2, 3);

    AttributeProfile::new(
        *choose(rng, Lifestyle::VALUES),
        *choose(rng, OutdoorIndoor::VALUES),
        *choose(rng, EatingHabit::VALUES),
    )
    .with_games(games)
    .with_anime(anime)
    .with_manga(manga)
    .with_foods(foods)
}

/// Shuffle a copy of `pool` and keep between `min` and `max` items.
fn pick<R: Rng, T: Copy>(rng: &mut R, pool: &[T], min: usize, max: usize) -> Vec<T> {
    let mut items = pool.to_vec();
    items.shuffle(rng);
    items.truncate(rng.gen_range(min..=max));
    items
}

fn choose<'a, R: Rng, T>(rng: &mut R, values: &'a [T]) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}
