use crate::errors::FormatError;
use crate::format::{FormatAttribute, FormatItem, Formatter};
use crate::key::KeyDescriptor;
use crate::options::Options;

fn intensity(opts: &Options) -> FormatItem {
    FormatItem::Attribute(FormatAttribute::Intensity(opts.theme.intensity))
}

/// The modifier label shown before the list of modes.
pub(crate) fn prefix_items(opts: &Options, prefix: &str, color: &str) -> Vec<FormatItem> {
    vec![intensity(opts), FormatItem::fg(color), FormatItem::text(prefix)]
}

/// A `<key> description` hint, with the key drawn in the hint color.
pub(crate) fn hint_items(opts: &Options, key: &KeyDescriptor, desc: &str) -> Vec<FormatItem> {
    let theme = &opts.theme;

    vec![
        intensity(opts),
        FormatItem::fg(&theme.text_color),
        FormatItem::text("<"),
        FormatItem::fg(&theme.hint_color),
        FormatItem::text(key.to_string()),
        FormatItem::fg(&theme.text_color),
        FormatItem::text(format!("> {desc}")),
    ]
}

/// The ` NAME MODE ` badge, drawn on the mode's color.
pub(crate) fn badge_items(opts: &Options, name: &str, color: &str) -> Vec<FormatItem> {
    let mut items = vec![];

    if let Some(glyph) = &opts.badge_glyph {
        items.push(FormatItem::fg(color));
        items.push(FormatItem::text(glyph.as_str()));
    }

    items.push(intensity(opts));
    items.push(FormatItem::fg(&opts.theme.mode_text_color));
    items.push(FormatItem::bg(color));
    items.push(FormatItem::text(format!(" {} MODE ", name.to_uppercase())));

    return items;
}

/// Format each `(key, description)` pair as a hint, and join them with the hint separator.
pub(crate) fn hints<'a, F, I>(fmt: &F, opts: &Options, binds: I) -> Result<String, FormatError>
where
    F: Formatter + ?Sized,
    I: IntoIterator<Item = (&'a KeyDescriptor, &'a str)>,
{
    let sep = format!(" {} ", opts.hint_separator);
    let hints = binds
        .into_iter()
        .map(|(key, desc)| fmt.format(&hint_items(opts, key, desc)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(hints.join(&sep))
}

/// Status text shown when no mode is active: the modifier, a hint for entering each mode, and
/// the normal mode's badge.
pub(crate) fn normal_text<'a, F, I>(
    fmt: &F,
    opts: &Options,
    modes: I,
) -> Result<String, FormatError>
where
    F: Formatter + ?Sized,
    I: IntoIterator<Item = (&'a KeyDescriptor, &'a str)>,
{
    let color = opts.theme.normal_mode_color.as_str();
    let prefix = fmt.format(&prefix_items(opts, &opts.modifier.to_string(), color))?;
    let hints = hints(fmt, opts, modes)?;
    let badge = fmt.format(&badge_items(opts, crate::registry::NORMAL_MODE, color))?;

    Ok(format!("{prefix} + {hints} {badge}"))
}

/// Status text shown while a mode is active: a hint for each of its bindings, and its badge.
pub(crate) fn mode_text<'a, F, I>(
    fmt: &F,
    opts: &Options,
    name: &str,
    color: &str,
    binds: I,
) -> Result<String, FormatError>
where
    F: Formatter + ?Sized,
    I: IntoIterator<Item = (&'a KeyDescriptor, &'a str)>,
{
    let hints = hints(fmt, opts, binds)?;
    let badge = fmt.format(&badge_items(opts, name, color))?;

    Ok(format!("{hints} {badge}"))
}
