use std::marker::PhantomData;
use std::sync::OnceLock;
use thiserror::Error;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// `TSource` types are bound to implement the `DerefByName` trait in order to
/// execute de-referencing operations for a `TResource` given its [`String`]
/// name.
///
/// As a more concrete example, [crate::types::ObjectType] stores a
/// `Vec<NamedRef<crate::Schema, loc::SourceLocation, crate::types::GraphQLType>>`
/// as a way of storing "pointers" to the [crate::types::InterfaceType]s
/// implemented by that [crate::types::ObjectType]. Storing [NamedRef]
/// references instead of direct references lets a [crate::Schema] hold
/// self-referential and mutually-referential types without self-references.
///
/// The first successful [NamedRef::deref()] memoizes the resource's slot in
/// `TSource`, so later lookups skip the by-name search. Concurrent first
/// dereferences are safe; they all compute the same slot.
#[derive(Clone, Debug)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
    resolved_slot: OnceLock<usize>,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
            resolved_slot: OnceLock::new(),
        }
    }

    /// Whether a previous [NamedRef::deref()] has memoized this reference's
    /// slot.
    pub fn is_resolved(&self) -> bool {
        self.resolved_slot.get().is_some()
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        // A memoized slot is only a hint: `source` may not be the store it was
        // computed against.
        if let Some(slot) = self.resolved_slot.get()
            && let Some(resource) = TResource::deref_slot(source, *slot, &self.name) {
            return Ok(resource);
        }

        let slot = TResource::slot_of(source, &self.name).ok_or_else(
            || DerefByNameError::DanglingReference(self.name.to_string()),
        )?;
        let _ = self.resolved_slot.set(slot);
        TResource::deref_slot(source, slot, &self.name).ok_or_else(
            || DerefByNameError::DanglingReference(self.name.to_string()),
        )
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    /// The slot of the resource named `name` within `source`.
    fn slot_of(source: &Self::Source, name: &str) -> Option<usize>;

    /// The resource at `slot`, provided it is still the one named `name`.
    fn deref_slot<'a>(
        source: &'a Self::Source,
        slot: usize,
        name: &str,
    ) -> Option<&'a Self>;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized {
        Self::slot_of(source, name)
            .and_then(|slot| Self::deref_slot(source, slot, name))
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("Nothing named `{0}` is defined")]
    DanglingReference(String),
}
