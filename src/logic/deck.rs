// src/logic/deck.rs

use itertools::Itertools;
use log::debug;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::Pile;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート × ランクの全組み合わせを 1 枚ずつ。生成された時点では全部裏向き！
pub fn create_standard_deck() -> Vec<Card> {
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(rank, suit))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。🎲
///
/// 残っているカードから一様にランダムな 1 枚を選んで新しい列の最後に足す、を繰り返す。
/// どの並び順も同じ確率で出てくるよ。乱数は呼び出し元から渡す (シード固定でテストできるように)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    let mut remaining = deck;
    let mut shuffled = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let pick = rng.gen_range(0..remaining.len());
        shuffled.push(remaining.remove(pick));
    }
    shuffled
}

/// シャッフル済みの山札を作る。`Vec` の最後が山札の一番上になる。
pub fn build_shuffled_stock<R: Rng + ?Sized>(rng: &mut R) -> Pile {
    let stock = Pile::from_cards(shuffle_deck(create_standard_deck(), rng));
    debug!("Built shuffled stock of {} cards", stock.len());
    stock
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<_> = deck.iter().map(|card| (card.suit(), card.rank())).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.is_face_up()), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle_deck(create_standard_deck(), &mut rng);

        let mut before: Vec<_> = create_standard_deck().iter().map(|c| (c.suit(), c.rank())).collect();
        let mut after: Vec<_> = shuffled.iter().map(|c| (c.suit(), c.rank())).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after, "シャッフルでカードが増えたり減ったりした！");
    }

    #[test]
    fn same_seed_same_order() {
        let first = build_shuffled_stock(&mut StdRng::seed_from_u64(99));
        let second = build_shuffled_stock(&mut StdRng::seed_from_u64(99));
        let third = build_shuffled_stock(&mut StdRng::seed_from_u64(100));

        assert_eq!(first, second);
        // 別のシードならほぼ確実に違う並びになる
        assert_ne!(first, third);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // 各カードが各位置に来る回数は trials / 52 前後になるはず。
        // カード (生成順) × 位置 の 52×52 の表で数える。
        const TRIALS: usize = 52 * 400;
        let deck = create_standard_deck();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = vec![[0usize; 52]; 52];

        for _ in 0..TRIALS {
            let shuffled = shuffle_deck(create_standard_deck(), &mut rng);
            for (position, card) in shuffled.iter().enumerate() {
                let origin = deck.iter().position(|c| c == card).expect("every card comes from the deck");
                counts[origin][position] += 1;
            }
        }

        // 1 マスあたり約 400 回 (標準偏差は約 20)。2704 マスあるので許容幅は広めに取る。
        let expected = (TRIALS / 52) as f64;
        for (origin, row) in counts.iter().enumerate() {
            assert_eq!(row.iter().sum::<usize>(), TRIALS);
            for (position, &count) in row.iter().enumerate() {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(
                    deviation < 0.3,
                    "card {} landed at position {} {} times (expected about {})",
                    origin,
                    position,
                    count,
                    expected
                );
            }
        }
    }
}
