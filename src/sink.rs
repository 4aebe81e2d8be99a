//! Handing dumps to whatever displays them.

use std::collections::{HashMap};
use std::io::{Write};

use tracing::{debug, warn};

use super::model::{Value};
use super::render::{dump_indented};

/// The id of the element that [`dump_out()`] writes to.
pub const DUMP_ELEMENT: &str = "dump";

/// Something that receives the text of a dump.
pub trait Sink {
    fn receive(&mut self, text: String);
}

/// The text replaces the previous contents, like assigning to a text field.
impl Sink for String {
    fn receive(&mut self, text: String) { *self = text; }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn receive(&mut self, text: String) { (**self).receive(text) }
}

/// Writes each dump followed by a newline.
///
/// A failed write is logged and otherwise ignored.
#[derive(Debug)]
pub struct WriteSink<W>(pub W);

impl<W: Write> Sink for WriteSink<W> {
    fn receive(&mut self, text: String) {
        if let Err(error) = writeln!(self.0, "{}", text).and_then(|()| self.0.flush()) {
            warn!(%error, "could not write dump");
        }
    }
}

// ----------------------------------------------------------------------------

/// A presentation surface, which may or may not contain a given element.
pub trait Surface {
    /// Returns the [`Sink`] with id `id`, if there is one.
    fn element(&mut self, id: &str) -> Option<&mut dyn Sink>;
}

impl<S: Sink> Surface for HashMap<String, S> {
    fn element(&mut self, id: &str) -> Option<&mut dyn Sink> {
        self.get_mut(id).map(|sink| sink as &mut dyn Sink)
    }
}

/// Dump `value` into the [`DUMP_ELEMENT`] of `surface`, if it has one.
pub fn dump_out(surface: &mut (impl Surface + ?Sized), value: &Value, unit: &str) {
    if let Some(sink) = surface.element(DUMP_ELEMENT) {
        sink.receive(dump_indented(value, unit));
    } else {
        debug!(element = DUMP_ELEMENT, "no element to dump into");
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_INDENT};
    use crate::model::{Object};

    #[test]
    fn fills_the_dump_element() {
        let object = Object::new();
        object.set("a", 1.into());
        let mut surface = HashMap::from([(DUMP_ELEMENT.to_owned(), String::from("stale"))]);
        dump_out(&mut surface, &object.into(), DEFAULT_INDENT);
        assert_eq!(surface[DUMP_ELEMENT], "/* Object (1) */ {\n  a: 1\n}");
    }

    #[test]
    fn missing_element_is_a_no_op() {
        let mut surface = HashMap::from([("other".to_owned(), String::from("untouched"))]);
        dump_out(&mut surface, &Value::Null, DEFAULT_INDENT);
        assert_eq!(surface.len(), 1);
        assert_eq!(surface["other"], "untouched");
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut boxed = Box::new(String::new());
        Sink::receive(&mut boxed, "text".to_owned());
        assert_eq!(*boxed, "text");
    }

    #[test]
    fn write_sink_adds_a_newline() {
        let mut sink = WriteSink(Vec::new());
        sink.receive(crate::dump(&Value::from(vec![Value::Null])));
        assert_eq!(String::from_utf8(sink.0).unwrap(), "/* Array (1) */ [\n  null\n]\n");
    }
}
