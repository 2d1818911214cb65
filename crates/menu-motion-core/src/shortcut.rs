//! Keyboard shortcut parsing for menu items.
//!
//! This module turns human-readable accelerator strings into the pair of
//! values a native menu item stores: a single key-equivalent character and a
//! modifier mask.
//!
//! - [`ModifierFlags`]: Bitset of Command, Control, Option and Shift
//! - [`ShortcutSpec`]: Parsed key + modifiers
//! - [`parse`]: Accelerator string to [`ShortcutSpec`]
//!
//! # Format
//!
//! Tokens are joined by `+` or `-`, and the two separators may be mixed:
//!
//! ```
//! use menu_motion_core::shortcut::{self, ModifierFlags};
//!
//! let hide = shortcut::parse("cmd+h").unwrap();
//! assert_eq!(hide.key, 'h');
//! assert_eq!(hide.modifiers, ModifierFlags::COMMAND);
//!
//! let close = shortcut::parse("cmd-control-w").unwrap();
//! assert_eq!(close.modifiers, ModifierFlags::COMMAND | ModifierFlags::CONTROL);
//! ```
//!
//! Modifier tokens are case-insensitive:
//!
//! - `cmd`, `command`: Command
//! - `ctrl`, `control`: Control
//! - `alt`, `opt`, `option`: Option
//! - `shift`: Shift
//!
//! The one remaining token is the key. Single characters are lower-cased.
//! Named keys (`space`, `tab`, `return`, `escape`, `delete`, arrows, `home`,
//! `end`, `pageup`, `pagedown`, `f1`-`f12`) map to the characters AppKit uses
//! for them. A literal `+` or `-` key is written doubled: `"cmd++"`, `"cmd--"`.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShortcutParseError;

// =============================================================================
// Modifier Flags
// =============================================================================

/// Modifier keys that must be held with a key equivalent.
///
/// Bit values match `NSEventModifierFlags`, so the mask can be handed to
/// AppKit unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierFlags(u64);

impl ModifierFlags {
    /// No modifiers.
    pub const NONE: ModifierFlags = ModifierFlags(0);
    /// The Shift key.
    pub const SHIFT: ModifierFlags = ModifierFlags(1 << 17);
    /// The Control key.
    pub const CONTROL: ModifierFlags = ModifierFlags(1 << 18);
    /// The Option (Alt) key.
    pub const OPTION: ModifierFlags = ModifierFlags(1 << 19);
    /// The Command key.
    pub const COMMAND: ModifierFlags = ModifierFlags(1 << 20);

    const ALL_BITS: u64 = Self::SHIFT.0 | Self::CONTROL.0 | Self::OPTION.0 | Self::COMMAND.0;

    /// Display order used by macOS menus.
    const ORDERED: [(ModifierFlags, &'static str, &'static str); 4] = [
        (Self::CONTROL, "control", "⌃"),
        (Self::OPTION, "option", "⌥"),
        (Self::SHIFT, "shift", "⇧"),
        (Self::COMMAND, "cmd", "⌘"),
    ];

    /// Raw mask value.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Build flags from a raw mask, dropping bits that are not modifiers.
    pub const fn from_bits_truncate(bits: u64) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// Check whether no modifier is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every flag in `other` is set.
    pub const fn contains(self, other: ModifierFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Canonical token names of the set flags, in menu display order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::ORDERED
            .into_iter()
            .filter(move |(flag, _, _)| self.contains(*flag))
            .map(|(_, name, _)| name)
    }

    /// Glyphs of the set flags, in menu display order (e.g. `"⌃⌘"`).
    pub fn symbols(self) -> String {
        Self::ORDERED
            .into_iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, _, symbol)| symbol)
            .collect()
    }
}

impl BitOr for ModifierFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        ModifierFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModifierFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ModifierFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        ModifierFlags(self.0 & rhs.0)
    }
}

// =============================================================================
// Shortcut Spec
// =============================================================================

/// A parsed keyboard shortcut: one key-equivalent character plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortcutSpec {
    /// The key-equivalent character, lower-cased.
    pub key: char,
    /// The modifier keys that must be held.
    pub modifiers: ModifierFlags,
}

impl ShortcutSpec {
    /// Create a shortcut from a key and modifiers.
    pub fn new(key: char, modifiers: ModifierFlags) -> Self {
        Self { key, modifiers }
    }

    /// Create a shortcut with no modifiers.
    pub fn key_only(key: char) -> Self {
        Self::new(key, ModifierFlags::NONE)
    }

    /// The key equivalent as the string a native menu item stores.
    pub fn key_equivalent(&self) -> String {
        self.key.to_string()
    }

    /// Render with menu glyphs, e.g. `"⌃⌘W"`.
    pub fn symbol_string(&self) -> String {
        let mut out = self.modifiers.symbols();
        match key_name(self.key) {
            Some(name) => out.push_str(&name.to_uppercase()),
            None => out.extend(self.key.to_uppercase()),
        }
        out
    }
}

impl fmt::Display for ShortcutSpec {
    /// Canonical accelerator form, e.g. `"control+cmd+w"`. Parses back to `self`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{name}+")?;
        }
        // A `+`/`-` key after the last `+` reads back as a doubled separator.
        match key_name(self.key) {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.key),
        }
    }
}

impl FromStr for ShortcutSpec {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<String> for ShortcutSpec {
    type Error = ShortcutParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<ShortcutSpec> for String {
    fn from(spec: ShortcutSpec) -> Self {
        spec.to_string()
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn is_separator(c: char) -> bool {
    c == '+' || c == '-'
}

/// Parse an accelerator string such as `"cmd+h"` or `"cmd-control-w"`.
///
/// # Errors
///
/// Returns [`ShortcutParseError`] if the string is empty, contains an empty
/// or unrecognized token, has no key, or has more than one key.
pub fn parse(accelerator: &str) -> Result<ShortcutSpec, ShortcutParseError> {
    let trimmed = accelerator.trim();
    if trimmed.is_empty() {
        return Err(ShortcutParseError::Empty);
    }

    let (body, mut key) = split_separator_key(trimmed);
    let mut modifiers = ModifierFlags::NONE;

    if !body.is_empty() {
        for token in body.split(is_separator) {
            let token = token.trim();
            if token.is_empty() {
                return Err(ShortcutParseError::EmptyToken(accelerator.to_string()));
            }

            if let Some(flag) = parse_modifier(token) {
                modifiers |= flag;
                continue;
            }

            let parsed = parse_key(token)
                .ok_or_else(|| ShortcutParseError::unknown_token(accelerator, token))?;
            if key.replace(parsed).is_some() {
                return Err(ShortcutParseError::MultipleKeys(accelerator.to_string()));
            }
        }
    }

    match key {
        Some(key) => Ok(ShortcutSpec { key, modifiers }),
        None => Err(ShortcutParseError::NoKey(accelerator.to_string())),
    }
}

/// Split off a literal `+`/`-` key.
///
/// `"+"` and `"-"` are the key alone; `"cmd++"` and `"cmd+-"` end in a
/// separator followed by the key. Everything else is returned untouched.
fn split_separator_key(s: &str) -> (&str, Option<char>) {
    let mut chars = s.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), None) if is_separator(last) => ("", Some(last)),
        (Some(last), Some(prev)) if is_separator(last) && is_separator(prev) => {
            (&s[..s.len() - last.len_utf8() - prev.len_utf8()], Some(last))
        }
        _ => (s, None),
    }
}

fn parse_modifier(token: &str) -> Option<ModifierFlags> {
    match token.to_lowercase().as_str() {
        "cmd" | "command" => Some(ModifierFlags::COMMAND),
        "ctrl" | "control" => Some(ModifierFlags::CONTROL),
        "alt" | "opt" | "option" => Some(ModifierFlags::OPTION),
        "shift" => Some(ModifierFlags::SHIFT),
        _ => None,
    }
}

/// Parse a key token to its key-equivalent character.
fn parse_key(token: &str) -> Option<char> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(c.to_lowercase().next().unwrap_or(c));
    }

    let lower = token.to_lowercase();
    NAMED_KEYS
        .iter()
        .find(|(names, _)| names.contains(&lower.as_str()))
        .map(|(_, key)| *key)
}

/// Canonical name of a key that has no printable form.
fn key_name(key: char) -> Option<&'static str> {
    NAMED_KEYS
        .iter()
        .find(|(_, named)| *named == key)
        .map(|(names, _)| names[0])
}

/// Named keys and the characters AppKit expects as their key equivalent.
///
/// The first name of each entry is the canonical one used for display.
const NAMED_KEYS: &[(&[&str], char)] = &[
    (&["space", "spacebar"], ' '),
    (&["tab"], '\t'),
    (&["return", "enter"], '\r'),
    (&["escape", "esc"], '\u{1b}'),
    (&["delete", "backspace"], '\u{8}'),
    (&["forwarddelete", "del"], '\u{f728}'),
    (&["up", "arrowup"], '\u{f700}'),
    (&["down", "arrowdown"], '\u{f701}'),
    (&["left", "arrowleft"], '\u{f702}'),
    (&["right", "arrowright"], '\u{f703}'),
    (&["f1"], '\u{f704}'),
    (&["f2"], '\u{f705}'),
    (&["f3"], '\u{f706}'),
    (&["f4"], '\u{f707}'),
    (&["f5"], '\u{f708}'),
    (&["f6"], '\u{f709}'),
    (&["f7"], '\u{f70a}'),
    (&["f8"], '\u{f70b}'),
    (&["f9"], '\u{f70c}'),
    (&["f10"], '\u{f70d}'),
    (&["f11"], '\u{f70e}'),
    (&["f12"], '\u{f70f}'),
    (&["home"], '\u{f729}'),
    (&["end"], '\u{f72b}'),
    (&["pageup", "pgup"], '\u{f72c}'),
    (&["pagedown", "pgdn"], '\u{f72d}'),
];

// =============================================================================
// Tests
// =============================================================================
