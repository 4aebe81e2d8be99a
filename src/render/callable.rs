use std::borrow::{Cow};

use once_cell::sync::{Lazy};
use regex::{Regex};

use crate::model::{Function};
use crate::names::{is_identifier, normalize_space};

/// What the host prints instead of the body of a built-in callable.
const NATIVE_CODE: &str = "[native code]";

/// `<name>(<args>)`, somewhere in a signature.
static SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\S*)\((.*)\)").expect("Invalid signature pattern")
});

/// Render `function` as a one-line signature with a placeholder body.
///
/// Callables are not containers: they are never registered, and nothing
/// they refer to is visited.
pub fn render_callable(function: &Function, indent: &str, prefix: &str) -> String {
    let (head, body) = split_declaration(function);
    let signature = rewrite_signature(&normalize_space(&head), function.arity);
    let body = match body.trim() {
        "" => "",
        NATIVE_CODE => "/* native */",
        _ => "/* ... */",
    };
    format!("{}{}{} {{{}}}", indent, prefix, signature, body)
}

/// The text the host would print for `function`, if any.
fn declaration(function: &Function) -> Option<Cow<str>> {
    match (&function.source, &function.name) {
        (Some(source), _) => Some(Cow::Borrowed(&**source)),
        (None, Some(name)) => Some(Cow::Owned(format!("function {}() {{ {} }}", name, NATIVE_CODE))),
        (None, None) => None,
    }
}

/// Split the declaration of `function` into the part before the body and
/// the body.
///
/// The body is between the first `{` and the last `}`, or else after the
/// first `=>`, which stays with the head. Failing both, a placeholder
/// declaration named after the runtime type is used.
fn split_declaration(function: &Function) -> (String, String) {
    if let Some(text) = declaration(function) {
        if let Some(open) = text.find('{') {
            let close = text.rfind('}').filter(|&close| close > open).unwrap_or(text.len());
            return (text[..open].to_owned(), text[open + 1..close].to_owned());
        }
        if let Some(arrow) = text.find("=>") {
            let (head, body) = text.split_at(arrow + 2);
            return (head.to_owned(), body.to_owned());
        }
    }
    (format!("function {}()", function.kind.type_name()), NATIVE_CODE.to_owned())
}

/// Tidy up the name and parameters in `head`, leaving any text around them
/// alone.
fn rewrite_signature(head: &str, arity: usize) -> String {
    let head = head.trim();
    let Some(captures) = SIGNATURE.captures(head) else { return head.to_owned(); };
    let (Some(whole), Some(name), Some(args)) = (captures.get(0), captures.get(1), captures.get(2))
    else { return head.to_owned(); };
    let name = function_name(name.as_str());
    let mut args = Cow::Borrowed(args.as_str().trim());
    if args.is_empty() && arity > 0 { args = Cow::Owned(format!("/* {} */", arity)); }
    format!("{}{}({}){}", &head[..whole.start()], name, args, &head[whole.end()..])
}

/// Keep the last segment of a dotted name, and comment it out if it is not
/// an identifier.
fn function_name(name: &str) -> Cow<str> {
    let name = name.rsplit_once('.').map_or(name, |(_, last)| last);
    if is_identifier(name) { Cow::Borrowed(name) } else { Cow::Owned(format!("/* {} */", name)) }
}

// ----------------------------------------------------------------------------
