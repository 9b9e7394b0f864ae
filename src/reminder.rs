//! Reminder cards shown in the front-office reminders panel.
//!
//! Reminders are opaque to the windowed list: it only needs their count and
//! the fixed card height. This module owns the card data, a deterministic
//! sample generator, and the JSON reminders file.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Rendered height of one reminder card in pixels.
pub const REMINDER_CARD_HEIGHT: f32 = 132.0;

/// Number of fully visible reminder cards in the panel.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

/// Cards rendered above/below the visible band for smooth scrolling.
pub const DEFAULT_BUFFER: usize = 1;

/// Current reminders file layout version.
pub const REMINDER_FILE_VERSION: u32 = 1;

/// What the reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Vaccination,
    Checkup,
    Dental,
    Medication,
    FollowUp,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 5] = [
        ReminderKind::Vaccination,
        ReminderKind::Checkup,
        ReminderKind::Dental,
        ReminderKind::Medication,
        ReminderKind::FollowUp,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ReminderKind::Vaccination => "Vaccination",
            ReminderKind::Checkup => "Annual checkup",
            ReminderKind::Dental => "Dental cleaning",
            ReminderKind::Medication => "Medication refill",
            ReminderKind::FollowUp => "Follow-up visit",
        }
    }
}

/// A single reminder card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub patient_name: String,
    pub species: String,
    pub owner_name: String,
    pub kind: ReminderKind,
    /// Days until due; negative when overdue
    pub due_in_days: i32,
    #[serde(default)]
    pub note: String,
}

impl Reminder {
    /// Returns true if the reminder is past its due date.
    pub fn is_overdue(&self) -> bool {
        self.due_in_days < 0
    }

    /// Short due-date description, e.g. "due today" or "3 days overdue".
    pub fn due_label(&self) -> String {
        match self.due_in_days {
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            -1 => "1 day overdue".to_string(),
            d if d < 0 => format!("{} days overdue", -d),
            d => format!("due in {} days", d),
        }
    }
}

const PATIENT_NAMES: &[&str] = &[
    "Biscuit", "Luna", "Max", "Pepper", "Milo", "Nala", "Rocky", "Hazel",
    "Ziggy", "Cleo", "Otis", "Juniper", "Bruno", "Maple", "Tofu", "Willow",
];

const SPECIES: &[&str] = &["Dog", "Cat", "Rabbit", "Ferret", "Parrot", "Guinea pig"];

const OWNER_NAMES: &[&str] = &[
    "A. Moreau", "J. Okafor", "L. Chen", "M. Rossi", "S. Novak", "R. Patel",
    "D. Kowalski", "E. Lindqvist", "T. Haddad", "K. Yamamoto",
];

const NOTES: &[&str] = &[
    "",
    "Call before noon",
    "Prefers text message",
    "Bring previous records",
    "Nervous around other animals",
];

/// Deterministic sample reminder generator.
pub struct ReminderGenerator {
    seed: u64,
}

impl ReminderGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates `count` reminders sorted by due date (most overdue first).
    pub fn generate(&self, count: usize) -> Vec<Reminder> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut reminders: Vec<Reminder> = (0..count)
            .map(|i| Reminder {
                id: i as u64 + 1,
                patient_name: pick(&mut rng, PATIENT_NAMES),
                species: pick(&mut rng, SPECIES),
                owner_name: pick(&mut rng, OWNER_NAMES),
                kind: ReminderKind::ALL[rng.gen_range(0..ReminderKind::ALL.len())],
                due_in_days: rng.gen_range(-14..=60),
                note: pick(&mut rng, NOTES),
            })
            .collect();

        reminders.sort_by_key(|r| (r.due_in_days, r.id));
        reminders
    }
}

impl Default for ReminderGenerator {
    fn default() -> Self {
        Self::new(42)
    }
}

fn pick(rng: &mut StdRng, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

/// On-disk reminders file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderFile {
    pub version: u32,
    pub reminders: Vec<Reminder>,
}

/// Reads a reminders file.
///
/// # Errors
/// Fails if the file cannot be read, is not valid JSON, or has an
/// unsupported version.
pub fn read_reminders(path: impl AsRef<Path>) -> Result<Vec<Reminder>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reminders file: {}", path.display()))?;
    let file: ReminderFile = serde_json::from_str(&text)
        .with_context(|| format!("Invalid reminders file: {}", path.display()))?;

    if file.version != REMINDER_FILE_VERSION {
        return Err(anyhow!(
            "Unsupported reminders file version {} (expected {})",
            file.version,
            REMINDER_FILE_VERSION
        ));
    }

    Ok(file.reminders)
}

/// Writes reminders to a file, replacing any existing content.
pub fn write_reminders(path: impl AsRef<Path>, reminders: &[Reminder]) -> Result<()> {
    let path = path.as_ref();
    let file = ReminderFile {
        version: REMINDER_FILE_VERSION,
        reminders: reminders.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file).context("Failed to serialize reminders")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write reminders file: {}", path.display()))?;
    Ok(())
}
