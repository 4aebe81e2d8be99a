use std::rc::{Rc};

use tracing::{trace};

use super::{Session};
use crate::model::{Array};
use crate::registry::{Container};

impl Session<'_> {
    /// Render `array` and, the first time it is seen, its elements.
    pub(super) fn render_sequence(&mut self, array: &Rc<Array>, indent: &str, prefix: &str) -> String {
        let container = Container::from(array);
        if let Some(id) = self.visited.find(&container) {
            trace!(id, "array already visited");
            return format!("{}{}/* Array ({}) */ [/* visited */]", indent, prefix, id);
        }
        let id = self.visited.register(container);
        let mut ret = format!("{}{}/* Array ({}) */ [", indent, prefix, id);
        let elements = array.elements();
        if !elements.is_empty() {
            let nested = self.nested(indent);
            let dumps: Vec<String> = elements.iter()
                .map(|element| self.render(element, &nested, ""))
                .collect();
            ret.push('\n');
            ret.push_str(&dumps.join(",\n"));
            ret.push('\n');
            ret.push_str(indent);
        }
        ret.push(']');
        ret
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::{dump};
    use crate::model::{Array, Object, Value};

    #[test]
    fn empty_array_is_one_line() {
        assert_eq!(dump(&Value::from(Array::new([]))), "/* Array (1) */ []");
    }

    #[test]
    fn elements_keep_their_order() {
        let array = Array::new(["c", "a", "b"].map(Value::from));
        assert_eq!(dump(&array.into()), "/* Array (1) */ [\n  \"c\",\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn self_reference_is_visited() {
        let array = Array::new([Value::from(1)]);
        array.push(array.clone().into());
        insta::assert_snapshot!(dump(&array.clone().into()), @r###"
        /* Array (1) */ [
          1,
          /* Array (1) */ [/* visited */]
        ]
        "###);
        // Break the cycle so the test does not leak.
        array.set(1, Value::Null);
    }

    #[test]
    fn shared_element_gets_one_id() {
        let shared = Object::new();
        shared.set("n", 1.into());
        let array = Array::new([shared.clone().into(), shared.into()]);
        insta::assert_snapshot!(dump(&array.into()), @r###"
        /* Array (1) */ [
          /* Object (2) */ {
            n: 1
          },
          /* Object (2) */ {/* visited */}
        ]
        "###);
    }
}
