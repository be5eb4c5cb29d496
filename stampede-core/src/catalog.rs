//! Fixed theme and stamp-icon tables.
//!
//! The core only cares about the table sizes; the style classes are carried
//! along so a renderer can look them up by index.

use serde::Serialize;

/// Visual theme applied to the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub badge: &'static str,
}

/// Stamp icon a square can be marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StampIcon {
    pub name: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
}

impl StampIcon {
    const fn new(name: &'static str, color: &'static str, bg: &'static str) -> Self {
        Self { name, color, bg }
    }
}

pub const THEMES: [Theme; 9] = [
    Theme {
        name: "Default",
        bg: "bg-slate-50",
        text: "text-slate-900",
        border: "border-slate-200",
        badge: "bg-slate-900 text-white hover:bg-slate-800",
    },
    Theme {
        name: "Rose",
        bg: "bg-rose-50",
        text: "text-rose-900",
        border: "border-rose-200",
        badge: "bg-teal-500 text-white hover:bg-teal-600",
    },
    Theme {
        name: "Sky",
        bg: "bg-sky-50",
        text: "text-sky-900",
        border: "border-sky-200",
        badge: "bg-orange-500 text-white hover:bg-orange-600",
    },
    Theme {
        name: "Mint",
        bg: "bg-emerald-50",
        text: "text-emerald-900",
        border: "border-emerald-200",
        badge: "bg-rose-500 text-white hover:bg-rose-600",
    },
    Theme {
        name: "Lemon",
        bg: "bg-amber-50",
        text: "text-amber-900",
        border: "border-amber-200",
        badge: "bg-violet-600 text-white hover:bg-violet-700",
    },
    Theme {
        name: "Lavender",
        bg: "bg-violet-50",
        text: "text-violet-900",
        border: "border-violet-200",
        badge: "bg-lime-500 text-black hover:bg-lime-600",
    },
    Theme {
        name: "Sage",
        bg: "bg-green-50",
        text: "text-green-900",
        border: "border-green-200",
        badge: "bg-fuchsia-600 text-white hover:bg-fuchsia-700",
    },
    Theme {
        name: "Sunset",
        bg: "bg-orange-50",
        text: "text-orange-900",
        border: "border-orange-200",
        badge: "bg-blue-600 text-white hover:bg-blue-700",
    },
    Theme {
        name: "Storm",
        bg: "bg-blue-100/50",
        text: "text-blue-900",
        border: "border-blue-300",
        badge: "bg-yellow-400 text-blue-900 hover:bg-yellow-500",
    },
];

pub const ICONS: [StampIcon; 12] = [
    StampIcon::new("Check", "text-green-500", "bg-green-50"),
    StampIcon::new("Rocket", "text-blue-500", "bg-blue-50"),
    StampIcon::new("Star", "text-yellow-500", "bg-yellow-50"),
    StampIcon::new("Flame", "text-orange-600", "bg-orange-50"),
    StampIcon::new("Heart", "text-pink-500", "bg-pink-50"),
    StampIcon::new("Footprints", "text-emerald-600", "bg-emerald-50"),
    StampIcon::new("Trophy", "text-amber-500", "bg-amber-50"),
    StampIcon::new("Target", "text-red-500", "bg-red-50"),
    StampIcon::new("Crown", "text-purple-500", "bg-purple-50"),
    StampIcon::new("Zap", "text-yellow-600", "bg-yellow-100"),
    StampIcon::new("Medal", "text-indigo-500", "bg-indigo-50"),
    StampIcon::new("Mountain", "text-slate-600", "bg-slate-100"),
];

pub const THEME_COUNT: usize = THEMES.len();
pub const ICON_COUNT: usize = ICONS.len();

#[must_use]
pub fn theme(index: usize) -> Option<&'static Theme> {
    THEMES.get(index)
}

#[must_use]
pub fn icon(index: usize) -> Option<&'static StampIcon> {
    ICONS.get(index)
}
