/// An assertion subject with a name, used in failure messages.
///
/// The assertion methods live next to their free-function counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Named<'n> {
    name: &'n str,
}

/// Names the subject of the following assertion.
pub fn named(name: &str) -> Named<'_> {
    Named { name }
}

impl<'n> Named<'n> {
    pub fn name(&self) -> &'n str {
        self.name
    }

    /// `name: ` ahead of a message, or nothing for an unnamed subject.
    pub(crate) fn prefix(&self) -> String {
        if self.name.is_empty() {
            String::new()
        } else {
            format!("{}: ", self.name)
        }
    }
}
