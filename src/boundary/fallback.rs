use std::fmt;
use std::rc::Rc;

use crate::context::{self, FallbackProps};

/// What an errored boundary renders instead of its children.
///
/// Every variant renders with the [`FallbackProps`] published, so nested
/// components can always reach the error through [`use_error`](crate::use_error).
pub enum Fallback<N> {
    /// A prebuilt node, cloned verbatim.
    Element(N),
    /// A component that reads the error through [`use_error`](crate::use_error).
    Component(Rc<dyn Fn() -> N>),
    /// A render function that receives the props explicitly.
    Render(Rc<dyn Fn(&FallbackProps) -> N>),
}

impl<N> Fallback<N> {
    #[inline]
    pub fn component<F>(component: F) -> Self
    where
        F: Fn() -> N + 'static,
    {
        Self::Component(Rc::new(component))
    }

    #[inline]
    pub fn render_with<F>(render: F) -> Self
    where
        F: Fn(&FallbackProps) -> N + 'static,
    {
        Self::Render(Rc::new(render))
    }

    pub(crate) fn render(&self, props: FallbackProps) -> N
    where
        N: Clone,
    {
        match self {
            Self::Element(node) => context::provide(props, || node.clone()),
            Self::Component(component) => context::provide(props, || component()),
            Self::Render(render) => {
                let explicit = props.clone();
                context::provide(props, || render(&explicit))
            },
        }
    }
}

impl<N> From<N> for Fallback<N> {
    #[inline]
    fn from(node: N) -> Self {
        Self::Element(node)
    }
}

impl<N: Clone> Clone for Fallback<N> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(node) => Self::Element(node.clone()),
            Self::Component(component) => Self::Component(Rc::clone(component)),
            Self::Render(render) => Self::Render(Rc::clone(render)),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Fallback<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(node) => f.debug_tuple("Element").field(node).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}
