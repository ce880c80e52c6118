//! Property-based tests for the two screen toggles.
//!
//! Both toggles are independent flips: applying one twice restores the
//! previous state, and neither touches the other or the style selection.

use cueplayer::screen::VideoScreen;
use cueplayer::types::playback::SubtitleVisibility;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    ToggleSubtitles,
    ToggleOptions,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![Just(Op::ToggleSubtitles), Just(Op::ToggleOptions)],
        0..40,
    )
}

fn apply(screen: &mut VideoScreen, op: Op) {
    match op {
        Op::ToggleSubtitles => {
            screen.toggle_subtitles();
        }
        Op::ToggleOptions => {
            screen.toggle_options_panel();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn toggling_twice_restores_state(ops in arb_ops(), mounted in any::<bool>()) {
        let mut screen = VideoScreen::new();
        if mounted {
            screen.mount();
        }
        for op in &ops {
            apply(&mut screen, *op);
        }
        let before = screen.view();

        apply(&mut screen, Op::ToggleSubtitles);
        apply(&mut screen, Op::ToggleSubtitles);
        prop_assert_eq!(screen.view(), before.clone());

        apply(&mut screen, Op::ToggleOptions);
        apply(&mut screen, Op::ToggleOptions);
        prop_assert_eq!(screen.view(), before);
    }

    #[test]
    fn state_follows_toggle_parity(ops in arb_ops()) {
        let mut screen = VideoScreen::new();
        screen.mount();
        let selection = screen.selection();
        for op in &ops {
            apply(&mut screen, *op);
        }

        let subtitle_flips = ops.iter().filter(|op| matches!(op, Op::ToggleSubtitles)).count();
        let option_flips = ops.len() - subtitle_flips;

        let expected = if subtitle_flips % 2 == 0 {
            SubtitleVisibility::Showing
        } else {
            SubtitleVisibility::Hidden
        };
        prop_assert_eq!(screen.subtitle_visibility(), expected);
        prop_assert_eq!(screen.options_visible(), option_flips % 2 == 1);
        prop_assert_eq!(screen.selection(), selection);
        prop_assert_eq!(screen.registry().map(|r| r.len()), Some(1));
    }
}
