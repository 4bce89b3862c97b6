//! Static rate cards: the billable work-item types each provider
//! recognizes.
//!
//! Cards live in the binary rather than behind the API; the set changes at
//! contract renegotiation, not at runtime.

use serde::Serialize;

use crate::{error::UnknownProvider, models::WorkProvider};

/// One billable work-item type on a provider's rate card.
///
/// `code` is the stable identifier stored on work items; `label` is the
/// display text shown in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateCardEntry {
    pub code: &'static str,
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> RateCardEntry {
    RateCardEntry { code, label }
}

/// Wessex card, ordered as on the billing schedule.
const WESSEX: &[RateCardEntry] = &[
    entry("EXC-FW", "Excavate in footway"),
    entry("EXC-CW", "Excavate in carriageway"),
    entry("EXC-SV", "Excavate in soft verge"),
    entry("REIN-FW", "Reinstate footway"),
    entry("REIN-CW", "Reinstate carriageway"),
    entry("DUCT-LAY", "Lay duct"),
    entry("ROD-ROPE", "Rod and rope duct"),
    entry("DESILT", "Desilt duct"),
    entry("CHAMBER-BUILD", "Build chamber"),
    entry("FRAME-COVER", "Install frame and cover"),
];

/// Gigaclear card.
const GIGACLEAR: &[RateCardEntry] = &[
    entry("POT-INST", "Install customer pot"),
    entry("TOBY-INST", "Install toby chamber"),
    entry("CAB-INST", "Install cabinet"),
    entry("POLE-ERECT", "Erect pole"),
    entry("CABLE-BLOW", "Blow fibre"),
    entry("CABLE-SPLICE", "Splice and test fibre"),
    entry("MOLE-PLOUGH", "Mole plough soft dig"),
    entry("REIN-VERGE", "Reinstate verge"),
];

/// The rate card for `provider`, in billing-schedule order.
pub fn entries_for(provider: WorkProvider) -> &'static [RateCardEntry] {
    match provider {
        WorkProvider::Wessex => WESSEX,
        WorkProvider::Gigaclear => GIGACLEAR,
    }
}

/// String-boundary variant of [`entries_for`]: resolves `name` first and
/// fails with [`UnknownProvider`] when it is not a recognized provider.
pub fn entries_for_name(name: &str) -> Result<&'static [RateCardEntry], UnknownProvider> {
    Ok(entries_for(name.parse()?))
}

/// Whether `code` is billable under `provider`'s rate card.
pub fn is_valid_code(provider: WorkProvider, code: &str) -> bool {
    entries_for(provider).iter().any(|e| e.code == code)
}
