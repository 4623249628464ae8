use proptest::prelude::*;
use teamscore::config::ScoringParams;
use teamscore::record::RawRecord;
use teamscore::scorer::score;

// --- STRATEGIES ---

prop_compose! {
    fn arb_record()(
        name in "[A-Z][a-z]{1,8}",
        interactions in 0u32..5_000,
        minutes in 0.0..120.0f64,
        errors in 0u32..200
    ) -> RawRecord {
        RawRecord::new(&name, interactions, minutes, errors)
    }
}

prop_compose! {
    fn arb_blank()(pad in " {0,4}") -> RawRecord {
        RawRecord::new(&pad, 999, 9.0, 9)
    }
}

proptest! {
    #[test]
    fn fixed_sub_scores_stay_in_range(records in prop::collection::vec(arb_record(), 0..25)) {
        let params = ScoringParams::fixed_target();
        for r in score(&records, &params) {
            for v in [r.productivity, r.efficiency, r.quality] {
                prop_assert!((0.0..=100.0).contains(&v), "sub-score {} out of range", v);
            }
        }
    }

    #[test]
    fn fixed_overall_is_rounded_mean(records in prop::collection::vec(arb_record(), 1..25)) {
        let params = ScoringParams::fixed_target();
        for r in score(&records, &params) {
            let mean = (r.productivity + r.efficiency + r.quality) / 3.0;
            prop_assert_eq!(r.overall, (mean * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn cohort_overall_is_exact_weighted_sum(records in prop::collection::vec(arb_record(), 1..25)) {
        let params = ScoringParams::cohort_relative();
        for r in score(&records, &params) {
            prop_assert_eq!(
                r.overall,
                r.productivity * 0.4 + r.efficiency * 0.3 + r.quality * 0.3
            );
        }
    }

    #[test]
    fn cohort_fallbacks_hold(records in prop::collection::vec(arb_record(), 1..25)) {
        let params = ScoringParams::cohort_relative();
        for (rec, r) in records.iter().zip(score(&records, &params)) {
            if rec.error_count == 0 {
                prop_assert_eq!(r.quality, 100.0);
            }
            if rec.average_handling_minutes == 0.0 {
                prop_assert_eq!(r.efficiency, 0.0);
            }
        }
    }

    #[test]
    fn blank_rows_do_not_shift_cohort(
        records in prop::collection::vec(arb_record(), 1..20),
        blanks in prop::collection::vec(arb_blank(), 1..5),
        at in 0usize..20
    ) {
        let params = ScoringParams::cohort_relative();
        let mut mixed = records.clone();
        for b in blanks {
            let idx = at.min(mixed.len());
            mixed.insert(idx, b);
        }
        prop_assert_eq!(score(&mixed, &params), score(&records, &params));
    }

    #[test]
    fn one_result_per_named_record(records in prop::collection::vec(arb_record(), 0..25)) {
        for params in [ScoringParams::fixed_target(), ScoringParams::cohort_relative()] {
            let out = score(&records, &params);
            prop_assert_eq!(out.len(), records.len());
            for (rec, r) in records.iter().zip(&out) {
                prop_assert_eq!(&rec.employee_name, &r.employee_name);
            }
        }
    }
}
