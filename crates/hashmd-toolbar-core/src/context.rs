//! Opaque editor context handed to action callbacks.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque value owned by the hosting editor.
///
/// The toolbar never inspects it; every click and hover callback receives it
/// verbatim. Hosts recover their own type with [`EditorContext::downcast_ref`].
/// Two contexts are equal when they point at the same allocation.
#[derive(Clone)]
pub struct EditorContext(Rc<dyn Any>);

impl EditorContext {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(())
    }
}

impl PartialEq for EditorContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EditorContext(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_roundtrip() {
        let ctx = EditorContext::new(String::from("doc-1"));
        assert_eq!(ctx.downcast_ref::<String>().map(String::as_str), Some("doc-1"));
        assert!(ctx.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_equality_is_identity() {
        let a = EditorContext::new(1u8);
        let b = EditorContext::new(1u8);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
