use std::rc::{Rc};

use tracing::{debug, trace};

use super::{Session};
use crate::model::{Object};
use crate::names::{key};
use crate::registry::{Container};

impl Session<'_> {
    /// Render `object` and, the first time it is seen, all of its own
    /// properties in sorted order.
    ///
    /// A property whose accessor fails is shown as `undefined` with a comment,
    /// and does not stop the dump.
    pub(super) fn render_composite(&mut self, object: &Rc<Object>, indent: &str, prefix: &str) -> String {
        let container = Container::from(object);
        if let Some(id) = self.visited.find(&container) {
            trace!(id, class = object.class(), "object already visited");
            return format!("{}{}/* {} ({}) */ {{/* visited */}}", indent, prefix, object.class(), id);
        }
        let id = self.visited.register(container);
        let mut ret = format!("{}{}/* {} ({}) */ {{", indent, prefix, object.class(), id);
        // Snapshot first: accessors may look at, or modify, `object`.
        let mut properties = object.properties();
        if !properties.is_empty() {
            properties.sort_by(|a, b| a.name.encode_utf16().cmp(b.name.encode_utf16()));
            let nested = self.nested(indent);
            let dumps: Vec<String> = properties.iter().map(|property| {
                let prefix = format!("{}: ", key(&property.name));
                match property.slot.read() {
                    Ok(value) => self.render(&value, &nested, &prefix),
                    Err(error) => {
                        debug!(class = object.class(), property = %property.name, %error, "property is inaccessible");
                        format!("{}{}undefined /* inaccessible */", nested, prefix)
                    },
                }
            }).collect();
            ret.push('\n');
            ret.push_str(&dumps.join(",\n"));
            ret.push('\n');
            ret.push_str(indent);
        }
        ret.push('}');
        ret
    }
}

// ----------------------------------------------------------------------------
