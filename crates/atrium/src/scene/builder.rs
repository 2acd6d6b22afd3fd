//! Declarative frame construction.
//!
//! [`SceneBuilder`] composes named passes into a [`Frame`]. Each pass is a
//! closure that appends commands to the shared [`CommandList`]; passes run in
//! insertion order, and the list records where each one starts and ends.
//!
//! # Example
//!
//! ```ignore
//! use atrium::prelude::*;
//!
//! let frame = SceneBuilder::new("demo")
//!     .pass("clear", |out| out.push(DrawCommand::Clear { color: [0.0, 0.0, 0.0, 1.0] }))
//!     .pass("boxes", |out| out.cuboid(Transform::IDENTITY, Material::new(Color::WHITE)))
//!     .pass("present", |out| out.push(DrawCommand::Present))
//!     .build();
//!
//! assert_eq!(frame.commands.pass_names(), ["clear", "boxes", "present"]);
//! ```

use serde::Serialize;

use super::command::CommandList;
use crate::error::SceneError;

type PassFn<'a> = Box<dyn FnMut(&mut CommandList) + 'a>;

/// One fully assembled frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub commands: CommandList,
}

impl Frame {
    /// Serialize the frame for dumping or diffing.
    pub fn to_json_pretty(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Composes named passes into a [`Frame`].
pub struct SceneBuilder<'a> {
    name: String,
    passes: Vec<(String, PassFn<'a>)>,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passes: Vec::new(),
        }
    }

    /// Add a named pass.
    pub fn pass(mut self, name: &str, f: impl FnMut(&mut CommandList) + 'a) -> Self {
        self.passes.push((name.to_string(), Box::new(f)));
        self
    }

    /// Add a pass only when `enabled`.
    pub fn pass_if(self, enabled: bool, name: &str, f: impl FnMut(&mut CommandList) + 'a) -> Self {
        if enabled { self.pass(name, f) } else { self }
    }

    /// Run every pass in order.
    pub fn build(self) -> Frame {
        let mut commands = CommandList::new();
        for (name, mut f) in self.passes {
            commands.begin_pass(name);
            f(&mut commands);
        }
        log::debug!("built frame '{}' ({} commands)", self.name, commands.len());
        Frame {
            name: self.name,
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCommand;

    #[test]
    fn passes_run_in_insertion_order() {
        let frame = SceneBuilder::new("test")
            .pass("first", |out| out.push(DrawCommand::Clear { color: [0.0; 4] }))
            .pass_if(false, "skipped", |out| out.push(DrawCommand::Present))
            .pass("second", |out| out.push(DrawCommand::Present))
            .build();
        assert_eq!(frame.name, "test");
        assert_eq!(frame.commands.pass_names(), vec!["first", "second"]);
        assert!(matches!(frame.commands.commands()[1], DrawCommand::Present));
    }

    #[test]
    fn passes_can_borrow_state() {
        let count = 3;
        let frame = SceneBuilder::new("borrow")
            .pass("many", |out| {
                for _ in 0..count {
                    out.push(DrawCommand::Present);
                }
            })
            .build();
        assert_eq!(frame.commands.len(), 3);
    }

    #[test]
    fn frame_dumps_as_json() {
        let frame = SceneBuilder::new("json").pass("p", |out| out.push(DrawCommand::Present)).build();
        let json = frame.to_json_pretty().unwrap();
        assert!(json.contains("\"json\""));
        assert!(json.contains("Present"));
    }
}
