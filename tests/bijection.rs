use bitperm::combinatorics::{from_positions, n_choose_k};
use bitperm::{BinomialTable, rank_of, unrank_of};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rayon::prelude::*;

fn class_strategy(max_width: u32) -> impl Strategy<Value = (u32, u32)> {
    (0..=max_width).prop_flat_map(|width| (Just(width), 0..=width))
}

fn ranked_class_strategy() -> impl Strategy<Value = (u32, u32, u128)> {
    class_strategy(128).prop_flat_map(|(width, ones)| {
        let size = n_choose_k(width, ones).expect("C(128, k) fits a u128");
        (Just(width), Just(ones), 0..size)
    })
}

fn member_strategy() -> impl Strategy<Value = (u32, u32, u64)> {
    class_strategy(64).prop_flat_map(|(width, ones)| {
        let positions: Vec<u32> = (0..width).collect();
        (
            Just(width),
            Just(ones),
            subsequence(positions, ones as usize).prop_map(from_positions::<u64>),
        )
    })
}

proptest! {
    #[test]
    fn unrank_then_rank_is_identity((width, ones, rank) in ranked_class_strategy()) {
        let table = BinomialTable::<u128>::for_word().unwrap();
        let bits = unrank_of(rank, width, ones, &table).unwrap();
        prop_assert_eq!(bits.count_ones(), ones);
        prop_assert_eq!(rank_of(bits, width, ones, &table).unwrap(), rank);
    }

    #[test]
    fn rank_then_unrank_is_identity((width, ones, bits) in member_strategy()) {
        let table = BinomialTable::<u64>::for_word().unwrap();
        let rank = rank_of(bits, width, ones, &table).unwrap();
        prop_assert!(u128::from(rank) < n_choose_k(width, ones).unwrap());
        prop_assert_eq!(unrank_of(rank, width, ones, &table).unwrap(), bits);
    }

    #[test]
    fn unranking_preserves_order((width, ones, a) in ranked_class_strategy(), b in any::<u128>()) {
        let table = BinomialTable::<u128>::for_word().unwrap();
        let size = table.class_size(&bitperm::BitClass::new(width, ones).unwrap()).unwrap();
        let b = b % size;
        let bits_a = unrank_of(a, width, ones, &table).unwrap();
        let bits_b = unrank_of(b, width, ones, &table).unwrap();
        prop_assert_eq!(a.cmp(&b), bits_a.cmp(&bits_b));
    }
}

#[test]
fn exhaustive_small_widths() {
    let table = BinomialTable::<u32>::build(14).unwrap();
    for width in 0..=14u32 {
        let mut ranks = vec![0u32; width as usize + 1];
        for bits in 0u32..1 << width {
            let ones = bits.count_ones();
            let rank = &mut ranks[ones as usize];
            assert_eq!(rank_of(bits, width, ones, &table), Ok(*rank));
            assert_eq!(unrank_of(*rank, width, ones, &table), Ok(bits));
            *rank += 1;
        }
        for (ones, &count) in ranks.iter().enumerate() {
            assert_eq!(Some(count), table.get(width, ones as u32));
        }
    }
}

#[test]
fn eight_choose_five() {
    let table = BinomialTable::<u32>::for_word().unwrap();
    assert_eq!(unrank_of(0, 8, 5, &table), Ok(31));
    assert_eq!(rank_of(31, 8, 5, &table), Ok(0));

    let expected: Vec<u32> = (0u32..256).filter(|v| v.count_ones() == 5).take(20).collect();
    let first: Vec<u32> = (0..20)
        .map(|rank| unrank_of(rank, 8, 5, &table).unwrap())
        .collect();
    assert_eq!(first, expected);
    assert_eq!(
        first[..7]
            .iter()
            .map(|bits| format!("{bits:08b}"))
            .collect::<Vec<_>>(),
        [
            "00011111", "00101111", "00110111", "00111011", "00111101", "00111110", "01001111"
        ]
    );
}

#[test]
fn boundary_classes_on_every_word() {
    fn check<W: bitperm::BitWord>() {
        let table = BinomialTable::<W>::for_word().unwrap();
        for width in 0..=W::BITS {
            assert_eq!(rank_of(W::ZERO, width, 0, &table), Ok(W::ZERO));
            assert_eq!(unrank_of(W::ZERO, width, 0, &table), Ok(W::ZERO));
            let full = W::low_mask(width);
            assert_eq!(rank_of(full, width, width, &table), Ok(W::ZERO));
            assert_eq!(unrank_of(W::ZERO, width, width, &table), Ok(full));
        }
    }
    check::<u8>();
    check::<u16>();
    check::<u32>();
    check::<u64>();
    check::<u128>();
}

#[test]
fn shared_table_across_threads() {
    let table = BinomialTable::<u64>::for_word().unwrap();
    let size = table.get(20, 7).unwrap();
    let mismatches = (0..size)
        .into_par_iter()
        .filter(|&rank| {
            let bits = unrank_of(rank, 20, 7, &table).unwrap();
            rank_of(bits, 20, 7, &table) != Ok(rank)
        })
        .count();
    assert_eq!(mismatches, 0);
}
