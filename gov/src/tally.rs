//! Vote tallying.
//!
//! A pure function over collected votes and a bonded-power view; no store
//! access, so it is unit-testable without any storage. All ratio checks are
//! cross-multiplications in u128, never division or floating point.

use agora_types::{GovParams, TallyResult, Vote, VoteOption};

use crate::staking::Staking;

const BPS_DENOM: u128 = 10_000;

/// The decision derived from a tally, plus the raw breakdown for audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyOutcome {
    /// Whether the proposal passed and its payload should execute.
    pub passes: bool,
    /// Whether deposits are burned (quorum failure) instead of refunded.
    pub burn_deposits: bool,
    /// Raw per-option totals, recorded on the proposal for audit/export.
    pub tally: TallyResult,
}

impl TallyOutcome {
    fn rejected(burn_deposits: bool, tally: TallyResult) -> Self {
        Self {
            passes: false,
            burn_deposits,
            tally,
        }
    }
}

/// Tally the votes on one proposal.
///
/// 1. Sum each voter's bonded power across their weighted options.
/// 2. Quorum: turnout below `quorum_bps` of total bonded power burns the
///    deposits. Zero total bonded power counts as a quorum failure.
/// 3. Everyone abstaining (or nobody voting) rejects without burning.
/// 4. Veto: a veto share above `veto_threshold_bps` of the non-abstain
///    power rejects without burning.
/// 5. Otherwise the proposal passes when the yes share of yes+no power
///    exceeds `pass_threshold_bps`.
pub fn tally(votes: &[Vote], staking: &dyn Staking, params: &GovParams) -> TallyOutcome {
    let mut result = TallyResult::default();

    for vote in votes {
        let power = staking.bonded_power(&vote.voter);
        if power == 0 {
            continue;
        }
        for weighted in &vote.options {
            let share = power * weighted.weight_bps as u128 / BPS_DENOM;
            match weighted.option {
                VoteOption::Yes => result.yes += share,
                VoteOption::Abstain => result.abstain += share,
                VoteOption::No => result.no += share,
                VoteOption::Veto => result.veto += share,
            }
        }
    }

    let total_bonded = staking.total_bonded();
    if total_bonded == 0
        || result.turnout() * BPS_DENOM < total_bonded * params.quorum_bps as u128
    {
        return TallyOutcome::rejected(true, result);
    }

    let decisive = result.yes + result.no + result.veto;
    if decisive == 0 {
        return TallyOutcome::rejected(false, result);
    }

    if result.veto * BPS_DENOM > decisive * params.veto_threshold_bps as u128 {
        return TallyOutcome::rejected(false, result);
    }

    let passes = result.yes * BPS_DENOM > (result.yes + result.no) * params.pass_threshold_bps as u128;
    TallyOutcome {
        passes,
        burn_deposits: false,
        tally: result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::{Address, Vote, WeightedVoteOption};
    use std::collections::BTreeMap;

    struct FixedStaking {
        powers: BTreeMap<String, u128>,
        total: u128,
    }

    impl FixedStaking {
        fn new(total: u128, powers: &[(&str, u128)]) -> Self {
            Self {
                powers: powers
                    .iter()
                    .map(|(name, p)| (format!("agora_{name}"), *p))
                    .collect(),
                total,
            }
        }
    }

    impl Staking for FixedStaking {
        fn bonded_power(&self, voter: &Address) -> u128 {
            self.powers.get(voter.as_str()).copied().unwrap_or(0)
        }

        fn total_bonded(&self) -> u128 {
            self.total
        }
    }

    fn params() -> GovParams {
        GovParams {
            quorum_bps: 4000,
            pass_threshold_bps: 5000,
            veto_threshold_bps: 3300,
            ..GovParams::default()
        }
    }

    fn vote(voter: &str, option: VoteOption) -> Vote {
        Vote::simple(1, Address::new(format!("agora_{voter}")), option)
    }

    #[test]
    fn unanimous_yes_passes() {
        // total=100, quorum=0.4, threshold=0.5, veto=0.33, yes=50:
        // participation 0.5 >= 0.4, veto ratio 0, yes ratio 1.0 > 0.5.
        let staking = FixedStaking::new(100, &[("alice", 50)]);
        let outcome = tally(&[vote("alice", VoteOption::Yes)], &staking, &params());
        assert!(outcome.passes);
        assert!(!outcome.burn_deposits);
        assert_eq!(outcome.tally.yes, 50);
    }

    #[test]
    fn below_quorum_burns_deposits() {
        // participation 0.1 < 0.4.
        let staking = FixedStaking::new(100, &[("alice", 10)]);
        let outcome = tally(&[vote("alice", VoteOption::Yes)], &staking, &params());
        assert!(!outcome.passes);
        assert!(outcome.burn_deposits);
        assert_eq!(outcome.tally.yes, 10);
    }

    #[test]
    fn quorum_boundary_is_inclusive() {
        // participation exactly 0.4 meets the quorum.
        let staking = FixedStaking::new(100, &[("alice", 40)]);
        let outcome = tally(&[vote("alice", VoteOption::Yes)], &staking, &params());
        assert!(outcome.passes);
        assert!(!outcome.burn_deposits);
    }

    #[test]
    fn veto_over_threshold_rejects_without_burn() {
        let staking = FixedStaking::new(100, &[("alice", 30), ("bob", 20)]);
        let votes = [vote("alice", VoteOption::Yes), vote("bob", VoteOption::Veto)];
        // veto ratio 20/50 = 0.4 > 0.33.
        let outcome = tally(&votes, &staking, &params());
        assert!(!outcome.passes);
        assert!(!outcome.burn_deposits);
        assert_eq!(outcome.tally.veto, 20);
    }

    #[test]
    fn all_abstain_rejects_without_burn() {
        let staking = FixedStaking::new(100, &[("alice", 60)]);
        let outcome = tally(&[vote("alice", VoteOption::Abstain)], &staking, &params());
        assert!(!outcome.passes);
        assert!(!outcome.burn_deposits);
        assert_eq!(outcome.tally.abstain, 60);
    }

    #[test]
    fn yes_exactly_at_threshold_fails() {
        // yes ratio must strictly exceed the threshold: 30/60 = 0.5 is a tie.
        let staking = FixedStaking::new(100, &[("alice", 30), ("bob", 30)]);
        let votes = [vote("alice", VoteOption::Yes), vote("bob", VoteOption::No)];
        let outcome = tally(&votes, &staking, &params());
        assert!(!outcome.passes);
        assert!(!outcome.burn_deposits);
    }

    #[test]
    fn zero_bonded_power_counts_as_quorum_failure() {
        let staking = FixedStaking::new(0, &[]);
        let outcome = tally(&[], &staking, &params());
        assert!(!outcome.passes);
        assert!(outcome.burn_deposits);
    }

    #[test]
    fn unknown_voters_carry_no_power() {
        let staking = FixedStaking::new(100, &[("alice", 50)]);
        let votes = [vote("alice", VoteOption::Yes), vote("ghost", VoteOption::Veto)];
        let outcome = tally(&votes, &staking, &params());
        assert!(outcome.passes);
        assert_eq!(outcome.tally.veto, 0);
    }

    #[test]
    fn split_vote_weights_are_fractional() {
        let staking = FixedStaking::new(100, &[("alice", 100)]);
        let votes = [Vote {
            proposal_id: 1,
            voter: Address::new("agora_alice"),
            options: vec![
                WeightedVoteOption {
                    option: VoteOption::Yes,
                    weight_bps: 7000,
                },
                WeightedVoteOption {
                    option: VoteOption::No,
                    weight_bps: 3000,
                },
            ],
        }];
        let outcome = tally(&votes, &staking, &params());
        assert_eq!(outcome.tally.yes, 70);
        assert_eq!(outcome.tally.no, 30);
        assert!(outcome.passes); // 70/100 > 0.5
    }

    #[test]
    fn veto_power_excluded_from_pass_denominator() {
        // yes=40, no=0, veto=20 (veto ratio 0.33... just at threshold with
        // 3300 bps: 20*10000 > 60*3300 => 200000 > 198000, rejected).
        let staking = FixedStaking::new(100, &[("alice", 40), ("bob", 20)]);
        let votes = [vote("alice", VoteOption::Yes), vote("bob", VoteOption::Veto)];
        let outcome = tally(&votes, &staking, &params());
        assert!(!outcome.passes);

        // Lower the veto share below the threshold and the pass check sees
        // only yes+no: 40/40 = 1.0 > 0.5.
        let staking = FixedStaking::new(100, &[("alice", 40), ("bob", 10)]);
        let outcome = tally(&votes, &staking, &params());
        assert!(outcome.passes);
    }
}
