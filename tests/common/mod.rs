use std::cell::Cell;
use std::rc::Rc;

use render_boundary::RenderError;

pub const ERROR_MESSAGE: &str = "Something went wrong!";

pub fn heading(text: &str) -> String {
    format!("<h1>{text}</h1>")
}

pub fn alert(text: &str) -> String {
    format!("<p role=\"alert\">{text}</p>")
}

/// Renders nothing, or fails with [`ERROR_MESSAGE`].
pub fn component_that_throws(has_error: bool) -> Result<String, RenderError> {
    if has_error {
        return Err(RenderError::msg(ERROR_MESSAGE));
    }
    Ok(String::new())
}

/// Shared invocation counter for callbacks.
#[derive(Clone, Default)]
pub struct Calls(Rc<Cell<usize>>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
