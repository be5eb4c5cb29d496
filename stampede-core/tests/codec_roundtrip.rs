use proptest::prelude::*;
use stampede_core::{
    BoardState, ICON_COUNT, Square, THEME_COUNT, decode, decode_or_default, encode,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square() -> impl Strategy<Value = Square> {
    (".{0,24}", proptest::option::of(0..ICON_COUNT))
        .prop_map(|(goal, stamped_idx)| Square { goal, stamped_idx })
}

fn board() -> impl Strategy<Value = BoardState> {
    (1_usize..=6)
        .prop_flat_map(|side| {
            (
                ".{0,16}",
                proptest::option::of(".{0,16}"),
                proptest::collection::vec(square(), side * side),
                0..THEME_COUNT,
                any::<u32>(),
            )
        })
        .prop_map(
            |(name, subtitle, squares, theme_index, grid_version)| BoardState {
                name,
                subtitle,
                squares,
                theme_index,
                grid_version,
            },
        )
}

proptest! {
    #[test]
    fn decode_inverts_encode(state in board()) {
        let decoded = decode(&encode(&state)).unwrap();
        prop_assert_eq!(decoded, state.normalized());
    }
}

#[test]
fn bad_payloads_fall_back_to_default_board() {
    init_logs();
    let default = BoardState::default();
    assert_eq!(decode_or_default(Some(""), 5), default);
    assert_eq!(decode_or_default(Some("garbage-not-base64"), 5), default);
    assert_eq!(decode_or_default(None, 5), default);

    let wrong_shape = lz_str::compress_to_encoded_uri_component(r#"{"name":"x"}"#);
    assert!(decode(&wrong_shape).is_err());
    assert_eq!(decode_or_default(Some(wrong_shape.as_str()), 5), default);

    let not_json = lz_str::compress_to_encoded_uri_component("hello there");
    assert!(decode(&not_json).is_err());
}

#[test]
fn form_decoded_plus_signs_still_decode() {
    let mut board = BoardState::default_with_side(4);
    board.name = "A fairly long team name to force a varied alphabet".into();
    let encoded = encode(&board);
    let mangled = encoded.replace('+', " ");
    assert_eq!(decode(&mangled).unwrap(), board);
}

#[test]
fn missing_subtitle_stays_missing() {
    let board = BoardState::default_with_side(2);
    assert_eq!(decode(&encode(&board)).unwrap().subtitle, None);
    let mut with_empty = board.clone();
    with_empty.subtitle = Some(String::new());
    assert_eq!(
        decode(&encode(&with_empty)).unwrap().subtitle,
        Some(String::new())
    );
}
