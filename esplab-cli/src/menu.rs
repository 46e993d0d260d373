//! Nested text menus over the sketch catalog.
//!
//! One generic renderer/dispatcher handles every menu: categories plus
//! "Detect Port" at the top level, numbered items plus "Back" inside a
//! category. All upload outcomes arrive as values and render as a single
//! styled line.

use std::io;

use console::{Term, style};
use esplab_flasher::{PortScan, ToolInvoker, UploadOutcome, Uploader};

use crate::catalog::{CATALOG, Category, MenuItem};

const BANNER: &str = "\
=====================================
       ESPLAB RESEARCH CONSOLE
=====================================";

/// Selection on a menu with `len` numbered entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// The designated back/exit input ("0").
    Back,
    /// A zero-based entry index.
    Entry(usize),
    Invalid,
}

fn parse_selection(input: &str, len: usize) -> Selection {
    match input.trim() {
        "0" => Selection::Back,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Selection::Entry(n - 1),
            _ => Selection::Invalid,
        },
    }
}

/// Runs the main menu until the user exits or stdin closes.
pub async fn run<S, T>(term: &Term, uploader: &Uploader<S, T>) -> io::Result<()>
where
    S: PortScan,
    T: ToolInvoker,
{
    loop {
        term.clear_screen()?;
        term.write_line(BANNER)?;
        term.write_line("")?;

        for (i, category) in CATALOG.iter().enumerate() {
            term.write_line(&format!("[{}] {}", i + 1, category.title))?;
        }
        term.write_line(&format!("[{}] Detect Port", CATALOG.len() + 1))?;
        term.write_line("[0] Exit")?;
        term.write_line("")?;

        let choice = prompt(term, "Enter your choice: ")?;
        match parse_selection(&choice, CATALOG.len() + 1) {
            Selection::Back => {
                term.write_line("Exiting...")?;
                return Ok(());
            }
            Selection::Entry(i) if i < CATALOG.len() => {
                category_menu(term, uploader, &CATALOG[i]).await?;
            }
            Selection::Entry(_) => {
                detect_port(term, uploader)?;
                pause(term)?;
            }
            Selection::Invalid => {
                term.write_line("Invalid choice")?;
                pause(term)?;
            }
        }
    }
}

async fn category_menu<S, T>(
    term: &Term,
    uploader: &Uploader<S, T>,
    category: &Category,
) -> io::Result<()>
where
    S: PortScan,
    T: ToolInvoker,
{
    loop {
        term.clear_screen()?;
        term.write_line(&format!("======== {} ========", category.title))?;
        term.write_line("")?;

        for (i, item) in category.items.iter().enumerate() {
            term.write_line(&format!("[{}] {}", i + 1, item.label()))?;
        }
        term.write_line("[0] Back")?;
        term.write_line("")?;

        let choice = prompt(term, "Select: ")?;
        match parse_selection(&choice, category.items.len()) {
            Selection::Back => return Ok(()),
            Selection::Entry(i) => dispatch(term, uploader, &category.items[i]).await?,
            Selection::Invalid => term.write_line("Invalid option")?,
        }

        pause(term)?;
    }
}

async fn dispatch<S, T>(
    term: &Term,
    uploader: &Uploader<S, T>,
    item: &MenuItem,
) -> io::Result<()>
where
    S: PortScan,
    T: ToolInvoker,
{
    match item {
        MenuItem::Sketch { label, file } => {
            term.write_line(&format!("Uploading {label}..."))?;
            report(term, &uploader.upload(file).await)
        }
        MenuItem::Stub { label } => {
            term.write_line(&format!("{label} is not implemented."))
        }
    }
}

fn report(term: &Term, outcome: &UploadOutcome) -> io::Result<()> {
    let line = match outcome {
        UploadOutcome::Success => style("Upload successful.").green().to_string(),
        UploadOutcome::NoDevice => style("ESP32 not detected.").yellow().to_string(),
        UploadOutcome::TimedOut => style("Upload timed out.").red().to_string(),
        UploadOutcome::Failure(failure) => {
            style(format!("Upload failed: {failure}.")).red().to_string()
        }
    };

    term.write_line(&line)
}

fn detect_port<S, T>(term: &Term, uploader: &Uploader<S, T>) -> io::Result<()>
where
    S: PortScan,
    T: ToolInvoker,
{
    match uploader.locate_port() {
        Some(found) => term.write_line(&format!(
            "Found device at {} ({})",
            found.path, found.description
        )),
        None => term.write_line("No matching serial device found."),
    }
}

fn prompt(term: &Term, message: &str) -> io::Result<String> {
    term.write_str(message)?;
    term.flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        // EOF backs out of every menu.
        buf.push('0');
    }

    Ok(buf)
}

fn pause(term: &Term) -> io::Result<()> {
    term.write_line("")?;
    prompt(term, "Press Enter to continue...").map(|_| ())
}
