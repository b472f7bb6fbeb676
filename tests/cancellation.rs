use lcs_dp::{lcs_with, length_with, table, CancellationToken, LcsCalculator, LcsError};

fn fired() -> CancellationToken {
    let token = CancellationToken::new();
    token.cancel();
    token
}

#[test]
fn fired_token_stops_every_entry_point() {
    let left = [1, 2, 5, 3, 1, 1, 5, 8, 3];
    let right = [1, 2, 3, 3, 4, 4, 5, 1, 6];

    assert_eq!(
        table::build(&left, &right, &fired()),
        Err(LcsError::Cancelled)
    );
    assert_eq!(length_with(&left, &right, &fired()), Err(LcsError::Cancelled));
    assert_eq!(lcs_with(&left, &right, &fired()), Err(LcsError::Cancelled));

    let calc = LcsCalculator::new(&left, &right);
    assert_eq!(calc.table_with(&fired()), Err(LcsError::Cancelled));
    assert_eq!(calc.length_with(&fired()), Err(LcsError::Cancelled));
    assert_eq!(calc.index_pairs_with(&fired()), Err(LcsError::Cancelled));
    assert_eq!(calc.values_with(&fired()), Err(LcsError::Cancelled));
}

#[test]
fn cancellation_leaves_no_partial_cache() {
    let left = [1, 2, 3];
    let right = [2, 3];
    let calc = LcsCalculator::new(&left, &right);
    assert_eq!(calc.table_with(&fired()), Err(LcsError::Cancelled));

    // A fresh token succeeds afterwards: the cancelled attempt cached nothing
    // partial, and retry is simply re-invocation.
    let token = CancellationToken::new();
    assert_eq!(calc.length_with(&token), Ok(2));
}

#[test]
fn token_fired_mid_computation_is_observed_at_a_checkpoint() {
    // Checkpoints sit at the start of each outer iteration, so a token that
    // fires before the call behaves identically to one firing mid-loop:
    // Cancelled, never a partial result.
    let left: Vec<u32> = (0..200).collect();
    let right: Vec<u32> = (0..200).rev().collect();
    let token = fired();
    assert_eq!(
        table::build(&left, &right, &token),
        Err(LcsError::Cancelled)
    );
    assert_eq!(length_with(&left, &right, &token), Err(LcsError::Cancelled));
}
