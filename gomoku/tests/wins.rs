use gomoku::*;

const FOUR: [(usize, usize); 4] = [(5, 5), (5, 6), (5, 7), (5, 8)];

fn four_in_a_row() -> Result<Board<20>, PlayError> {
    let mut board = Board::default();
    for pos in FOUR {
        board.place(pos.into(), Player::One)?;
    }
    Ok(board)
}

#[test]
fn fifth_stone_wins() -> Result<(), PlayError> {
    let mut board = four_in_a_row()?;
    let last = Pos::new(5, 9);
    board.place(last, Player::One)?;
    assert_eq!(board.outcome(last, Player::One), GameResult::Winner(Player::One));
    Ok(())
}

#[test]
fn any_missing_stone_is_ongoing() -> Result<(), PlayError> {
    for gap in FOUR {
        let mut board = four_in_a_row()?;
        board.take(gap.into())?;
        let last = Pos::new(5, 9);
        board.place(last, Player::One)?;
        assert_eq!(board.outcome(last, Player::One), GameResult::Ongoing, "gap at {gap:?}");
    }
    Ok(())
}

#[test]
fn opponent_stones_do_not_count() -> Result<(), PlayError> {
    let mut board = four_in_a_row()?;
    let last = Pos::new(5, 9);
    board.place(last, Player::Two)?;
    assert_eq!(board.outcome(last, Player::Two), GameResult::Ongoing);
    Ok(())
}

#[test]
fn diagonal_wins() -> Result<(), PlayError> {
    let mut board = Board::<20>::default();
    for i in 0..5 {
        board.place(Pos::new(10 + i, 4 - i), Player::Two)?;
    }
    assert_eq!(board.outcome(Pos::new(12, 2), Player::Two), GameResult::Winner(Player::Two));

    let mut board = Board::<20>::default();
    for i in 0..5 {
        board.place(Pos::new(15 + i, 15 + i), Player::One)?;
    }
    assert_eq!(board.outcome(Pos::new(19, 19), Player::One), GameResult::Winner(Player::One));
    Ok(())
}

#[test]
fn vertical_win_at_the_edge() -> Result<(), PlayError> {
    let game = Game::<20>::from_moves(&[
        (0, 19),
        (0, 0),
        (1, 19),
        (1, 0),
        (2, 19),
        (2, 0),
        (3, 19),
        (3, 0),
        (4, 19),
    ])?;
    assert_eq!(game.result, GameResult::Winner(Player::One));
    Ok(())
}

#[test]
fn overline_wins() -> Result<(), PlayError> {
    let mut board = Board::<20>::default();
    for y in [0, 1, 2, 4, 5] {
        board.place(Pos::new(0, y), Player::One)?;
    }
    let last = Pos::new(0, 3);
    board.place(last, Player::One)?;
    assert_eq!(board.outcome(last, Player::One), GameResult::Winner(Player::One));
    Ok(())
}

#[test]
fn full_board_without_five_is_a_draw() -> Result<(), PlayError> {
    let mut board = Board::<20>::default();
    let mut last = None;
    for x in 0..20 {
        for y in 0..20 {
            // Pairs along rows, alternating down columns: nothing lines up five.
            let player = if (y / 2 + x) % 2 == 0 { Player::One } else { Player::Two };
            board.place(Pos::new(x, y), player)?;
            last = Some((Pos::new(x, y), player));
        }
    }
    let (pos, player) = last.unwrap();
    assert!(board.full());
    assert_eq!(board.outcome(pos, player), GameResult::Draw);
    for (pos, player) in board.stones().collect::<Vec<_>>() {
        assert!(!board.is_five(pos, player));
    }
    Ok(())
}
