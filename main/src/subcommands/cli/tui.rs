use crate::util::*;
use std::io::{self, Write};
use tarneeb_lib::primitives::*;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub fn clear_screen() {
    // ANSI clear plus cursor home; the table is a line-based hotseat UI
    print!("\x1b[2J\x1b[1;1H");
    unwrap!(io::stdout().flush());
}

fn suit_color(esuit: ESuit) -> Color {
    match esuit {
        ESuit::Hearts => Color::Red,
        ESuit::Spades => Color::Cyan,
        ESuit::Diamonds => Color::Yellow,
        ESuit::Clubs => Color::Green,
    }
}

fn wprint_card(stdout: &mut StandardStream, card: ECard) {
    unwrap!(stdout.set_color(ColorSpec::new().set_fg(Some(suit_color(card.suit())))));
    unwrap!(write!(stdout, "{}", card));
    unwrap!(stdout.reset());
}

pub fn print_card(card: ECard) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    wprint_card(&mut stdout, card);
}

pub fn print_hand(str_name: &str, hand: &SHand, b_show_indices: bool) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    unwrap!(write!(stdout, "{}'s hand: ", str_name));
    for (i_card, &card) in hand.cards().iter().enumerate() {
        if 0<i_card {
            unwrap!(write!(stdout, ", "));
        }
        if b_show_indices {
            unwrap!(write!(stdout, "{}:", i_card));
        }
        wprint_card(&mut stdout, card);
    }
    unwrap!(writeln!(stdout));
}

pub fn print_trick(astr_name: &EnumMap<EPlayerIndex, String>, trick: &STrick) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for (epi, &card) in trick.iter() {
        unwrap!(write!(stdout, "{}: ", astr_name[epi]));
        wprint_card(&mut stdout, card);
        unwrap!(write!(stdout, "  "));
    }
    unwrap!(writeln!(stdout));
}

pub fn prompt(str_question: &str) -> String {
    print!("{}: ", str_question);
    unwrap!(io::stdout().flush());
    let mut str_input = String::new();
    unwrap!(io::stdin().read_line(&mut str_input));
    str_input.trim().to_string()
}
