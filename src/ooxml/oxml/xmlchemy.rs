//! Typed child-element and attribute descriptors.
//!
//! Each element type declares its schema-constrained children as `const`
//! descriptors, for example
//!
//! ```ignore
//! const TC_W: ZeroOrOne<TcPr, TblWidth> = ZeroOrOne::new(TC_PR_SEQ.split_at(2).1);
//! ```
//!
//! and builds its public accessors on top of them. All descriptors share one
//! placement algorithm: a new child goes immediately before the first
//! existing sibling listed among its successors, which keeps children in
//! schema order whatever order callers add them in.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::simpletypes::SimpleType;
use crate::ooxml::oxml::tree::{NodeId, XmlTree};
use std::marker::PhantomData;

/// A typed handle to an element of one specific kind.
pub trait Element: Copy {
    /// Prefixed tag name, e.g. `w:tc`
    const TAG: &'static str;

    /// Wrap a node id without checking its tag.
    fn wrap(id: NodeId) -> Self;

    /// The underlying node.
    fn node(self) -> NodeId;

    /// Create a new, detached, minimal valid element of this kind.
    fn create(tree: &mut XmlTree) -> Self {
        Self::wrap(tree.create_element(Self::TAG))
    }

    /// View `id` as this element kind, failing if its tag differs.
    fn cast(tree: &XmlTree, id: NodeId) -> Result<Self> {
        if tree.is(id, Self::TAG) {
            Ok(Self::wrap(id))
        } else {
            Err(OoxmlError::UnexpectedElement {
                expected: Self::TAG,
                found: tree.name(id).unwrap_or("#text").to_string(),
            })
        }
    }
}

/// Declare a `Copy` handle type implementing [`Element`].
macro_rules! define_element {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        define_element!($(#[$meta])* $name, $tag, |tree| {
            <$name as $crate::ooxml::oxml::xmlchemy::Element>::wrap(tree.create_element($tag))
        });
    };
    ($(#[$meta:meta])* $name:ident, $tag:literal, |$tree:ident| $create:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name($crate::ooxml::oxml::tree::NodeId);

        impl $crate::ooxml::oxml::xmlchemy::Element for $name {
            const TAG: &'static str = $tag;

            #[inline]
            fn wrap(id: $crate::ooxml::oxml::tree::NodeId) -> Self {
                Self(id)
            }

            #[inline]
            fn node(self) -> $crate::ooxml::oxml::tree::NodeId {
                self.0
            }

            fn create($tree: &mut $crate::ooxml::oxml::tree::XmlTree) -> Self {
                $create
            }
        }
    };
}
pub(crate) use define_element;

/// Where a newly added child goes among its parent's children.
#[derive(Debug, Clone, Copy)]
pub enum Placement {
    /// Before the first existing sibling with one of these tags, else last
    BeforeSuccessors(&'static [&'static str]),
    /// Always the first child
    First,
}

impl Placement {
    fn insert(self, tree: &mut XmlTree, parent: NodeId, child: NodeId) {
        match self {
            Self::BeforeSuccessors(successors) => tree.attach_before(parent, child, successors),
            Self::First => tree.attach(parent, Some(0), child),
        }
    }
}

/// Zero or one child of kind `T` under a `P`.
pub struct ZeroOrOne<P, T> {
    placement: Placement,
    _kind: PhantomData<fn() -> (P, T)>,
}

impl<P: Element, T: Element> ZeroOrOne<P, T> {
    pub const fn new(successors: &'static [&'static str]) -> Self {
        Self {
            placement: Placement::BeforeSuccessors(successors),
            _kind: PhantomData,
        }
    }

    /// A child that, when present, is always the first child of its parent.
    pub const fn first() -> Self {
        Self {
            placement: Placement::First,
            _kind: PhantomData,
        }
    }

    pub fn get(&self, tree: &XmlTree, parent: P) -> Option<T> {
        tree.first_child_tagged(parent.node(), T::TAG).map(T::wrap)
    }

    pub fn get_or_add(&self, tree: &mut XmlTree, parent: P) -> T {
        match self.get(tree, parent) {
            Some(child) => child,
            None => self.add(tree, parent),
        }
    }

    /// Create a new child and insert it at its schema position. Callers
    /// must have removed any existing child first.
    pub fn add(&self, tree: &mut XmlTree, parent: P) -> T {
        let child = T::create(tree);
        self.placement.insert(tree, parent.node(), child.node());
        child
    }

    pub fn remove(&self, tree: &mut XmlTree, parent: P) {
        let existing: Vec<NodeId> = tree.children_tagged(parent.node(), T::TAG).collect();
        for id in existing {
            tree.remove(id);
        }
    }
}

/// Zero or more children of kind `T` under a `P`.
pub struct ZeroOrMore<P, T> {
    successors: &'static [&'static str],
    _kind: PhantomData<fn() -> (P, T)>,
}

impl<P: Element, T: Element> ZeroOrMore<P, T> {
    pub const fn new(successors: &'static [&'static str]) -> Self {
        Self {
            successors,
            _kind: PhantomData,
        }
    }

    pub fn iter<'a>(&self, tree: &'a XmlTree, parent: P) -> impl Iterator<Item = T> + use<'a, P, T> {
        tree.children_tagged(parent.node(), T::TAG).map(T::wrap)
    }

    pub fn list(&self, tree: &XmlTree, parent: P) -> Vec<T> {
        self.iter(tree, parent).collect()
    }

    pub fn count(&self, tree: &XmlTree, parent: P) -> usize {
        self.iter(tree, parent).count()
    }

    /// Create a new child and insert it after the existing ones.
    pub fn add(&self, tree: &mut XmlTree, parent: P) -> T {
        let child = T::create(tree);
        tree.attach_before(parent.node(), child.node(), self.successors);
        child
    }
}

/// Exactly one child of kind `T` under a `P`.
pub struct OneAndOnlyOne<P, T> {
    _kind: PhantomData<fn() -> (P, T)>,
}

impl<P: Element, T: Element> OneAndOnlyOne<P, T> {
    pub const fn new() -> Self {
        Self { _kind: PhantomData }
    }

    /// The required child; a missing child means the tree was assembled
    /// outside this crate's constructors.
    pub fn get(&self, tree: &XmlTree, parent: P) -> Result<T> {
        tree.first_child_tagged(parent.node(), T::TAG)
            .map(T::wrap)
            .ok_or(OoxmlError::MissingChild {
                parent: P::TAG,
                child: T::TAG,
            })
    }
}

/// One or more children of kind `T` under a `P`.
pub struct OneOrMore<P, T> {
    inner: ZeroOrMore<P, T>,
}

impl<P: Element, T: Element> OneOrMore<P, T> {
    pub const fn new(successors: &'static [&'static str]) -> Self {
        Self {
            inner: ZeroOrMore::new(successors),
        }
    }

    pub fn iter<'a>(&self, tree: &'a XmlTree, parent: P) -> impl Iterator<Item = T> + use<'a, P, T> {
        self.inner.iter(tree, parent)
    }

    pub fn list(&self, tree: &XmlTree, parent: P) -> Vec<T> {
        self.inner.list(tree, parent)
    }

    pub fn first(&self, tree: &XmlTree, parent: P) -> Result<T> {
        self.iter(tree, parent).next().ok_or(OoxmlError::MissingChild {
            parent: P::TAG,
            child: T::TAG,
        })
    }

    pub fn add(&self, tree: &mut XmlTree, parent: P) -> T {
        self.inner.add(tree, parent)
    }
}

fn parse_attr<T: SimpleType>(attribute: &'static str, value: &str) -> Result<T> {
    T::from_xml(value).ok_or_else(|| OoxmlError::InvalidAttributeValue {
        attribute,
        value: value.to_string(),
        expected: T::EXPECTED,
    })
}

/// An optional attribute of element `E` holding a `T`, with an optional
/// default reported when the attribute is absent.
pub struct OptionalAttribute<E, T> {
    name: &'static str,
    default: Option<T>,
    _element: PhantomData<fn() -> E>,
}

impl<E: Element, T: SimpleType> OptionalAttribute<E, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            _element: PhantomData,
        }
    }

    pub const fn with_default(name: &'static str, default: T) -> Self {
        Self {
            name,
            default: Some(default),
            _element: PhantomData,
        }
    }

    pub fn get(&self, tree: &XmlTree, element: E) -> Result<Option<T>> {
        match tree.attribute(element.node(), self.name) {
            Some(value) => parse_attr(self.name, value).map(Some),
            None => Ok(self.default),
        }
    }

    /// Write the attribute; `None` or the default value removes it.
    pub fn set(&self, tree: &mut XmlTree, element: E, value: Option<T>) {
        match value {
            Some(value) if Some(value) != self.default => {
                tree.set_attribute(element.node(), self.name, value.to_xml());
            },
            _ => {
                tree.remove_attribute(element.node(), self.name);
            },
        }
    }
}

/// A required attribute of element `E` holding a `T`.
pub struct RequiredAttribute<E, T> {
    name: &'static str,
    _kind: PhantomData<fn() -> (E, T)>,
}

impl<E: Element, T: SimpleType> RequiredAttribute<E, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _kind: PhantomData,
        }
    }

    pub fn get(&self, tree: &XmlTree, element: E) -> Result<T> {
        let value = tree
            .attribute(element.node(), self.name)
            .ok_or(OoxmlError::MissingAttribute {
                element: E::TAG,
                attribute: self.name,
            })?;
        parse_attr(self.name, value)
    }

    pub fn set(&self, tree: &mut XmlTree, element: E, value: T) {
        tree.set_attribute(element.node(), self.name, value.to_xml());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    define_element!(Parent, "w:tcPr");
    define_element!(Alpha, "w:tcW");
    define_element!(Beta, "w:gridSpan");
    define_element!(Gamma, "w:vMerge");

    const ALPHA: ZeroOrOne<Parent, Alpha> = ZeroOrOne::new(&["w:gridSpan", "w:vMerge"]);
    const BETA: ZeroOrOne<Parent, Beta> = ZeroOrOne::new(&["w:vMerge"]);
    const GAMMA: ZeroOrMore<Parent, Gamma> = ZeroOrMore::new(&[]);
    const FIRST: ZeroOrOne<Parent, Beta> = ZeroOrOne::first();
    const REQUIRED: OneAndOnlyOne<Parent, Alpha> = OneAndOnlyOne::new();
    const VAL: OptionalAttribute<Beta, i64> = OptionalAttribute::with_default("w:val", 1);
    const REQ_VAL: RequiredAttribute<Beta, i64> = RequiredAttribute::new("w:val");

    fn locals(tree: &XmlTree, parent: Parent) -> Vec<&str> {
        tree.element_children(parent.node())
            .filter_map(|id| tree.local_name(id))
            .collect()
    }

    #[test]
    fn test_zero_or_one_placement() {
        let mut tree = XmlTree::new();
        let parent = Parent::create(&mut tree);
        GAMMA.add(&mut tree, parent);
        BETA.get_or_add(&mut tree, parent);
        ALPHA.get_or_add(&mut tree, parent);
        ALPHA.get_or_add(&mut tree, parent);
        assert_eq!(locals(&tree, parent), ["tcW", "gridSpan", "vMerge"]);

        ALPHA.remove(&mut tree, parent);
        assert!(ALPHA.get(&tree, parent).is_none());
        assert_eq!(locals(&tree, parent), ["gridSpan", "vMerge"]);
    }

    #[test]
    fn test_first_placement() {
        let mut tree = XmlTree::new();
        let parent = Parent::create(&mut tree);
        GAMMA.add(&mut tree, parent);
        FIRST.add(&mut tree, parent);
        assert_eq!(locals(&tree, parent), ["gridSpan", "vMerge"]);
    }

    #[test]
    fn test_one_and_only_one_missing() {
        let mut tree = XmlTree::new();
        let parent = Parent::create(&mut tree);
        assert_eq!(
            REQUIRED.get(&tree, parent),
            Err(OoxmlError::MissingChild {
                parent: "w:tcPr",
                child: "w:tcW"
            })
        );
    }

    #[test]
    fn test_optional_attribute_default() {
        let mut tree = XmlTree::new();
        let beta = Beta::create(&mut tree);
        assert_eq!(VAL.get(&tree, beta), Ok(Some(1)));
        VAL.set(&mut tree, beta, Some(3));
        assert_eq!(tree.attribute(beta.node(), "w:val"), Some("3"));
        VAL.set(&mut tree, beta, Some(1));
        assert_eq!(tree.attribute(beta.node(), "w:val"), None);
    }

    #[test]
    fn test_required_attribute() {
        let mut tree = XmlTree::new();
        let beta = Beta::create(&mut tree);
        assert!(matches!(
            REQ_VAL.get(&tree, beta),
            Err(OoxmlError::MissingAttribute { .. })
        ));
        tree.set_attribute(beta.node(), "w:val", "x");
        assert!(matches!(
            REQ_VAL.get(&tree, beta),
            Err(OoxmlError::InvalidAttributeValue { .. })
        ));
        REQ_VAL.set(&mut tree, beta, -4);
        assert_eq!(REQ_VAL.get(&tree, beta), Ok(-4));
    }

    #[test]
    fn test_cast() {
        let mut tree = XmlTree::new();
        let beta = Beta::create(&mut tree);
        assert!(Beta::cast(&tree, beta.node()).is_ok());
        assert!(matches!(
            Alpha::cast(&tree, beta.node()),
            Err(OoxmlError::UnexpectedElement { expected: "w:tcW", .. })
        ));
    }
}
