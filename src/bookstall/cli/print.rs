use super::styles::Palette;
use bookstall::commands::{CmdMessage, ListedBook, MessageLevel};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const KHR_WIDTH: usize = 12;
const USD_WIDTH: usize = 10;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_books(books: &[ListedBook], palette: &Palette) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    for lb in books {
        let position = format!("{:>3}.", lb.position);
        let name = truncate(&lb.record.name, NAME_WIDTH);
        // Pad manually: format width specifiers would count ANSI codes.
        let name_pad = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));

        let khr = if lb.record.khr.is_empty() {
            "-".to_string()
        } else {
            format!("{} KHR", lb.record.khr)
        };
        let usd = if lb.record.usd.is_empty() {
            "-".to_string()
        } else {
            format!("${}", lb.record.usd)
        };

        println!(
            "{} {}{} {} {}",
            palette.position(&position),
            palette.title(&name),
            name_pad,
            palette.amount(&format!("{:>width$}", khr, width = KHR_WIDTH)),
            palette.muted(&format!("{:>width$}", usd, width = USD_WIDTH)),
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
