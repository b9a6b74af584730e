//! Vendor reference data - lead vendor labels and buy rates.
//!
//! Vendor names arrive from sheets and the CRM in every imaginable
//! spelling; keys are normalized (lowercased, separators stripped)
//! before lookup. The tables themselves are maintained by the sales
//! desk and change a few times a season.

use rust_decimal::Decimal;

/// Normalizes a raw vendor value into a lookup key: trimmed, lowercased,
/// with spaces, slashes and underscores removed.
pub fn normalize_vendor_key(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '/' | '_'))
        .collect()
}

/// Canonical display label for a vendor key, if known.
pub fn vendor_label(key: &str) -> Option<&'static str> {
    let label = match normalize_vendor_key(key).as_str() {
        "general" => "GENERAL",
        "inbound" => "INBOUND",
        "sms" => "SMS",
        "advancegro" => "Advance gro",
        "axad" => "AXAD",
        "googlecalls" => "GOOGLE CALLS",
        "buffercall" => "Aetna",
        "ancletadvising" => "Anclet advising",
        "blmcalls" => "BLM CALLS",
        "loopcalls" => "LOOP CALLS",
        "nobufferaca" => "NO BUFFER ACA",
        "raycalls" => "RAY CALLS",
        "nomiaca" => "Nomi ACA",
        "hcsmedia" => "HCS MEDIA",
        "francalls" => "Fran Calls",
        "acaking" => "ACA KING",
        "ptacacalls" => "PT ACA CALLS",
        "hcscaa" => "HCS CAA",
        "slavaaca" => "Slava ACA",
        "slavaaca2" => "Slava ACA 2",
        "francallssupp" => "Fran Calls SUPP",
        "derekinhousefb" => "DEREK INHOUSE FB",
        "allicalladdoncall" => "ALI CALL ADDON CALL",
        "joshaca" => "JOSH ACA",
        "hcs1p" => "HCS1p",
        "hcsmediacpl" => "HCS MEDIA CPL",
        _ => return None,
    };
    Some(label)
}

/// Per-call buy rate for vendors bought on a per-call basis.
pub fn vendor_call_rate(key: &str) -> Option<Decimal> {
    let rate = match normalize_vendor_key(key).as_str() {
        "francalls" => 75,
        "hcsmedia" => 75,
        "buffercall" => 80,
        "acaking" => 75,
        "raycalls" => 75,
        _ => return None,
    };
    Some(Decimal::from(rate))
}

/// Cost-per-lead rate for vendors bought on a CPL basis.
pub fn vendor_cpl_rate(key: &str) -> Option<Decimal> {
    let rate = match normalize_vendor_key(key).as_str() {
        "acaking" => 35,
        "joshaca" => 30,
        "francalls" => 25,
        "hcsmediacpl" => 25,
        _ => return None,
    };
    Some(Decimal::from(rate))
}
