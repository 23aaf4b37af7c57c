use std::fmt;

/// Strategy producing human-readable text from a message template.
///
/// Holders pass every error message through a translator. The output is
/// cosmetic: it never changes whether a value is accepted.
pub trait Translate {
    fn translate(&self, template: &str, args: &[&dyn fmt::Display]) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &[&dyn fmt::Display]) -> String,
{
    fn translate(&self, template: &str, args: &[&dyn fmt::Display]) -> String {
        self(template, args)
    }
}

/// The default translator: keeps the template's language and fills
/// `{}` placeholders with `args` in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate(&self, template: &str, args: &[&dyn fmt::Display]) -> String {
        substitute(template, args)
    }
}

/// Replace each `{}` in `template` with the next argument.
///
/// Placeholders without a matching argument are kept verbatim; extra
/// arguments are ignored.
#[must_use]
pub fn substitute(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}
