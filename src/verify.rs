//! Cross-checks of the rank/unrank engines against an independent oracle.
//!
//! Small classes are swept exhaustively against a recursive generator that
//! never touches the binomial table. Classes too large to enumerate are
//! checked on random ranks and random members instead.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::binomial_table::BinomialTable;
use crate::class::BitClass;
use crate::combinatorics::{from_positions, n_choose_k};
use crate::error::Error;
use crate::word::BitWord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Largest class swept member by member.
    pub exhaustive_limit: u128,
    /// Random checks per class above the exhaustive limit.
    pub samples: usize,
    pub seed: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: 1 << 16,
            samples: 1024,
            seed: 0x5eed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyMode {
    Exhaustive,
    Sampled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    pub class: BitClass,
    pub mode: VerifyMode,
    /// Number of members or samples that were checked.
    pub checked: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Engine(#[from] Error),

    #[error("class {class}: {what} at rank {rank}: expected {expected}, found {found}")]
    Mismatch {
        class: BitClass,
        what: &'static str,
        rank: u128,
        expected: u128,
        found: u128,
    },
}

fn check(
    class: BitClass,
    what: &'static str,
    rank: u128,
    expected: u128,
    found: u128,
) -> Result<(), VerifyError> {
    if expected != found {
        return Err(VerifyError::Mismatch {
            class,
            what,
            rank,
            expected,
            found,
        });
    }
    Ok(())
}

/// Members of `class` in ascending order, built by choosing or skipping each
/// position from the most significant one down.
pub fn ascending_members<W: BitWord>(class: &BitClass) -> Vec<W> {
    fn descend<W: BitWord>(positions: u32, ones: u32, prefix: W, out: &mut Vec<W>) {
        if positions == 0 {
            out.push(prefix);
            return;
        }
        let index = positions - 1;
        // A clear bit here gives the smaller members, so it goes first.
        if ones < positions {
            descend(index, ones, prefix, out);
        }
        if ones > 0 {
            descend(index, ones - 1, prefix.with_bit(index), out);
        }
    }

    let mut out = Vec::new();
    descend(class.width(), class.ones(), W::ZERO, &mut out);
    out
}

/// Verify one class against the oracle.
pub fn verify_class<W: BitWord>(
    table: &BinomialTable<W>,
    class: BitClass,
    config: &VerifyConfig,
) -> Result<VerifyReport, VerifyError> {
    let size = table.class_size(&class)?.to_u128();
    if let Some(expected) = n_choose_k(class.width(), class.ones()) {
        check(class, "class size", 0, expected, size)?;
    }

    if size <= config.exhaustive_limit {
        verify_exhaustive(table, class, size)
    } else {
        verify_sampled(table, class, size, config)
    }
}

fn verify_exhaustive<W: BitWord>(
    table: &BinomialTable<W>,
    class: BitClass,
    size: u128,
) -> Result<VerifyReport, VerifyError> {
    let (width, ones) = (class.width(), class.ones());
    let members = ascending_members::<W>(&class);
    check(class, "member count", 0, size, members.len() as u128)?;

    let mut enumerated = table.permutations(width, ones)?;
    for (index, &bits) in members.iter().enumerate() {
        let rank = index as u128;
        let found = table.rank_of(bits, width, ones)?;
        check(class, "rank_of", rank, rank, found.to_u128())?;

        let rank = found;
        let found = table.unrank_of(rank, width, ones)?;
        check(class, "unrank_of", rank.to_u128(), bits.to_u128(), found.to_u128())?;

        let found = enumerated.next().map_or(u128::MAX, BitWord::to_u128);
        check(class, "enumerator", rank.to_u128(), bits.to_u128(), found)?;
    }
    if let Some(extra) = enumerated.next() {
        check(class, "enumerator end", size, 0, extra.to_u128())?;
    }

    Ok(VerifyReport {
        class,
        mode: VerifyMode::Exhaustive,
        checked: size,
    })
}

fn verify_sampled<W: BitWord>(
    table: &BinomialTable<W>,
    class: BitClass,
    size: u128,
    config: &VerifyConfig,
) -> Result<VerifyReport, VerifyError> {
    let (width, ones) = (class.width(), class.ones());
    // Every class gets its own stream so results do not depend on scheduling.
    let mut rng = StdRng::seed_from_u64(config.seed ^ (u64::from(width) << 32 | u64::from(ones)));
    let random_rank = |rng: &mut StdRng| -> Result<W, VerifyError> {
        let rank = rng.gen_range(0..size);
        W::from_u128(rank).ok_or(VerifyError::Mismatch {
            class,
            what: "rank fits word",
            rank,
            expected: rank,
            found: 0,
        })
    };

    for _ in 0..config.samples {
        // Random rank: unrank, then rank back.
        let rank = random_rank(&mut rng)?;
        let bits = table.unrank_of(rank, width, ones)?;
        check(class, "population", rank.to_u128(), ones.into(), bits.count_ones().into())?;
        let found = table.rank_of(bits, width, ones)?;
        check(class, "rank_of", rank.to_u128(), rank.to_u128(), found.to_u128())?;

        // Random member drawn from positions: rank, then unrank back.
        let positions = sample(&mut rng, width as usize, ones as usize);
        let bits: W = from_positions(positions.into_iter().map(|index| index as u32));
        let rank = table.rank_of(bits, width, ones)?;
        let found = table.unrank_of(rank, width, ones)?;
        check(class, "unrank_of", rank.to_u128(), bits.to_u128(), found.to_u128())?;

        // Order between two random ranks survives unranking.
        let (low, high) = {
            let a = random_rank(&mut rng)?;
            let b = random_rank(&mut rng)?;
            (a.min(b), a.max(b))
        };
        let low_bits = table.unrank_of(low, width, ones)?;
        let high_bits = table.unrank_of(high, width, ones)?;
        let ordered = low_bits.cmp(&high_bits) == low.cmp(&high);
        check(class, "ordering", high.to_u128(), 1, ordered.into())?;
    }

    Ok(VerifyReport {
        class,
        mode: VerifyMode::Sampled,
        checked: config.samples as u128,
    })
}

/// Every class `(n, k)` with `n <= max_width`, in `width:ones` order.
pub fn classes_up_to(max_width: u32) -> Vec<BitClass> {
    (0..=max_width)
        .flat_map(|width| (0..=width).map(move |ones| (width, ones)))
        .filter_map(|(width, ones)| BitClass::new(width, ones).ok())
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_members_are_ascending_and_complete() {
        let class = BitClass::new(7, 3).unwrap();
        let members = ascending_members::<u8>(&class);
        let expected: Vec<u8> = (0u8..128).filter(|v| v.count_ones() == 3).collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn oracle_boundary_classes() {
        assert_eq!(ascending_members::<u8>(&BitClass::new(0, 0).unwrap()), vec![0]);
        assert_eq!(ascending_members::<u8>(&BitClass::new(5, 0).unwrap()), vec![0]);
        assert_eq!(
            ascending_members::<u8>(&BitClass::new(5, 5).unwrap()),
            vec![0b1_1111]
        );
    }

    #[test]
    fn exhaustive_for_small_widths() {
        let table = BinomialTable::<u16>::for_word().unwrap();
        let config = VerifyConfig::default();
        for class in classes_up_to(12) {
            let report = verify_class(&table, class, &config).unwrap();
            assert_eq!(report.mode, VerifyMode::Exhaustive);
            assert_eq!(Some(report.checked), n_choose_k(class.width(), class.ones()));
        }
    }

    #[test]
    fn sampled_for_large_classes() {
        let table = BinomialTable::<u64>::for_word().unwrap();
        let config = VerifyConfig {
            exhaustive_limit: 1000,
            samples: 64,
            seed: 7,
        };
        let report = verify_class(&table, BitClass::new(64, 32).unwrap(), &config).unwrap();
        assert_eq!(report.mode, VerifyMode::Sampled);
        assert_eq!(report.checked, 64);
    }

    #[test]
    fn sampled_on_widest_word() {
        let table = BinomialTable::<u128>::for_word().unwrap();
        let config = VerifyConfig {
            exhaustive_limit: 0,
            samples: 16,
            seed: 1,
        };
        for ones in [1, 63, 64, 127] {
            let class = BitClass::new(128, ones).unwrap();
            assert!(verify_class(&table, class, &config).is_ok());
        }
    }

    #[test]
    fn reports_missing_table_rows() {
        let table = BinomialTable::<u32>::build(4).unwrap();
        let class = BitClass::new(5, 2).unwrap();
        assert!(matches!(
            verify_class(&table, class, &VerifyConfig::default()),
            Err(VerifyError::Engine(Error::Uninitialized { .. }))
        ));
    }

    #[test]
    fn class_listing() {
        let classes = classes_up_to(2)
            .into_iter()
            .map(|class| class.to_string())
            .collect_vec();
        assert_eq!(classes, ["0:0", "1:0", "1:1", "2:0", "2:1", "2:2"]);
    }
}
