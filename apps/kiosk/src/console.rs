//! Console command parsing and rendering.
//!
//! The kiosk front end is a plain stdin/stdout loop; everything here is
//! pure string work so it can be tested without a terminal.

use tare_core::{discounted_unit_price, ProductRecord, ReceiptLine};
use tare_session::{BurstOutcome, SessionPhase, SessionSnapshot};

/// One line of shopper input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Run a detection burst.
    Capture,
    /// Show the current display.
    List,
    /// Choose a displayed product by index.
    Select(usize),
    /// Price the selection and print a receipt.
    Receipt,
    /// Show the assigned weight.
    Weight,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Empty lines parse to [`ConsoleCommand::List`]
    /// so bare Enter refreshes the display.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(ConsoleCommand::List);
        };

        match word {
            "capture" | "c" => Ok(ConsoleCommand::Capture),
            "list" | "l" => Ok(ConsoleCommand::List),
            "select" | "s" => match parts.next().map(str::parse) {
                Some(Ok(index)) => Ok(ConsoleCommand::Select(index)),
                _ => Err("Usage: select <number>".to_string()),
            },
            "receipt" | "r" => Ok(ConsoleCommand::Receipt),
            "weight" | "w" => Ok(ConsoleCommand::Weight),
            "help" | "h" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(format!("Unknown command '{other}' (try 'help')")),
        }
    }
}

pub const HELP: &str = "\
Commands:
  capture   (c)  run a detection burst and resolve products
  list      (l)  show the products on display
  select N  (s)  choose product N for the receipt
  receipt   (r)  price the selection at the displayed weight
  weight    (w)  show the assigned weight
  help      (h)  this message
  quit      (q)  leave the kiosk";

/// Describes how a burst ended, in shopper-facing words.
pub fn render_outcome(outcome: &BurstOutcome) -> String {
    match outcome {
        BurstOutcome::NoDetections => "No products detected. Place items and try again.".to_string(),
        BurstOutcome::CatalogUnavailable { reason } => {
            format!("Product information is unavailable right now ({reason})")
        }
        BurstOutcome::Displayed {
            products,
            weight_kg,
        } => {
            if products.is_empty() {
                format!("Weight {weight_kg:.3} kg, but nothing detected is in the catalog.")
            } else {
                format!(
                    "Detected {} product(s) at {:.3} kg. Run 'list' to see them.",
                    products.len(),
                    weight_kg
                )
            }
        }
    }
}

/// Renders the current display list.
pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    if snapshot.phase == SessionPhase::Idle {
        return "Nothing on the scale. Run 'capture' to start.".to_string();
    }

    let mut out = String::new();
    match snapshot.weight_kg {
        Some(weight_kg) => out.push_str(&format!("Weight: {weight_kg:.3} kg\n")),
        None => out.push_str("Weight: -\n"),
    }

    if snapshot.products.is_empty() {
        out.push_str("No catalog matches for the detected items.");
        return out;
    }

    for (index, product) in snapshot.products.iter().enumerate() {
        let marker = if snapshot.selected == Some(index) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{marker}[{index}] {}\n",
            render_price_tag(product)
        ));
    }
    out.push_str("Select with: select <number>");
    out
}

/// One product line, discount shown the way the shelf tag would.
fn render_price_tag(product: &ProductRecord) -> String {
    if product.has_discount() {
        format!(
            "{}  was ${:.2}/kg now ${:.2}/kg ({:.0}% off)",
            product.name,
            product.price,
            discounted_unit_price(product),
            product.discount_percent()
        )
    } else {
        format!("{}  ${:.2}/kg", product.name, product.price)
    }
}

/// Printable receipt block.
pub fn render_receipt(line: &ReceiptLine) -> String {
    format!(
        "----- RECEIPT -----\n\
         Product:      {}\n\
         Price per kg: ${:.2}\n\
         Weight:       {:.3} kg\n\
         Total:        ${:.2}\n\
         -------------------",
        line.product_name, line.unit_price, line.weight_kg, line.total
    )
}

// =============================================================================
// Tests
// =============================================================================
