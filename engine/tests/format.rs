use engine::{AdMode, Dice, DieKind, RollRequest, create_roll, format_roll};

fn formatted(die: DieKind, quantity: u32, modifier: i32, advantage: AdMode, script: Vec<u32>) -> String {
    let mut dice = Dice::from_scripted(script);
    let res = create_roll(
        &mut dice,
        RollRequest {
            die,
            quantity,
            modifier,
            advantage,
        },
    )
    .unwrap();
    format_roll(&res)
}

#[test]
fn plain_roll_with_positive_modifier() {
    insta::assert_snapshot!(
        formatted(DieKind::D6, 2, 3, AdMode::Normal, vec![4, 2]),
        @"2D6+3: [4, 2] = 9"
    );
}

#[test]
fn negative_modifier_keeps_its_sign() {
    insta::assert_snapshot!(
        formatted(DieKind::D4, 1, -1, AdMode::Normal, vec![3]),
        @"1D4-1: [3] = 2"
    );
}

#[test]
fn zero_modifier_is_omitted() {
    insta::assert_snapshot!(
        formatted(DieKind::D100, 1, 0, AdMode::Normal, vec![57]),
        @"1D100: [57] = 57"
    );
}

#[test]
fn advantage_annotation() {
    insta::assert_snapshot!(
        formatted(DieKind::D20, 1, 2, AdMode::Advantage, vec![7, 20]),
        @"1D20 with advantage: [7, 20]+2 = 22"
    );
}

#[test]
fn disadvantage_annotation() {
    insta::assert_snapshot!(
        formatted(DieKind::D20, 1, 0, AdMode::Disadvantage, vec![19, 4]),
        @"1D20 with disadvantage: [19, 4] = 4"
    );
}
