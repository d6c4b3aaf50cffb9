use super::decimal::{js_to_string, parse_number, to_fixed, to_precision};

pub const DEFAULT_SIG_FIGS: usize = 3;

const MIN_SIG_FIGS: usize = 1;
const MAX_SIG_FIGS: usize = 21;

/// SI scale factors from femto to peta, smallest first.
const SI_PREFIXES: [(f64, &str); 11] = [
    (1e-15, "f"),
    (1e-12, "p"),
    (1e-9, "n"),
    (1e-6, "µ"),
    (1e-3, "m"),
    (1.0, ""),
    (1e3, "k"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
    (1e15, "P"),
];

/// Round `value` to `sig_figs` significant figures.
///
/// `None` passes through. `sig_figs` is clamped to [1, 21].
///
/// ```
/// use format_utils::number::to_sig_figs;
/// assert_eq!(to_sig_figs(Some(5555.0), 2), Some(5600.0));
/// assert_eq!(to_sig_figs(None, 2), None);
/// ```
pub fn to_sig_figs(value: Option<f64>, sig_figs: usize) -> Option<f64> {
    let sig_figs = sig_figs.clamp(MIN_SIG_FIGS, MAX_SIG_FIGS);
    value.map(|v| parse_number(&to_precision(v, sig_figs)))
}

/// Format `value` with `sig_figs` significant figures and an SI suffix.
///
/// Trailing zeros are kept so the rendered digits always carry the requested
/// precision: `1e-9` at two figures is `"1.0n"`. Values too large for the
/// `P` suffix are rendered unscaled. `None` renders as `"undefined"`.
pub fn to_sig_figs_with_unit(value: Option<f64>, sig_figs: usize) -> String {
    let Some(value) = value else {
        return "undefined".to_string();
    };
    let sig_figs = sig_figs.clamp(MIN_SIG_FIGS, MAX_SIG_FIGS);

    if value == 0.0 {
        return to_fixed(0.0, sig_figs - 1);
    }

    for (scale, symbol) in SI_PREFIXES {
        if value.abs() < scale * 1e3 {
            let scaled = value / scale;
            let rounded = parse_number(&to_precision(scaled, sig_figs));
            let magnitude = scaled.abs().log10().floor() as i64;
            let decimals = (sig_figs as i64 - 1 - magnitude).max(0) as usize;
            return format!("{}{symbol}", to_fixed(rounded, decimals));
        }
    }

    js_to_string(value)
}
