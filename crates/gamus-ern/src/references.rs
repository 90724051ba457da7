//! Referencias estables del mensaje.
//!
//! Todas se derivan del índice de la pista, así que dos ejecuciones sobre la
//! misma entrada producen exactamente las mismas referencias.

/// Referencia del release principal.
pub const MAIN_RELEASE_REF: &str = "R0";

/// Referencia de recurso de la pista `index` (base 0): `A1`, `A2`, ...
pub fn resource_ref(index: usize) -> String {
  format!("A{}", index + 1)
}

/// Referencia del release individual de la pista `index` (base 0): `R1`, `R2`, ...
pub fn track_release_ref(index: usize) -> String {
  format!("R{}", index + 1)
}

/// Reparte las referencias de un release con `track_count` pistas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAllocator {
  track_count: usize,
}

impl ReferenceAllocator {
  pub fn new(track_count: usize) -> Self {
    Self { track_count }
  }

  pub fn track_count(&self) -> usize {
    self.track_count
  }

  pub fn resource_refs(&self) -> impl Iterator<Item = String> {
    (0..self.track_count).map(resource_ref)
  }

  pub fn track_release_refs(&self) -> impl Iterator<Item = String> {
    (0..self.track_count).map(track_release_ref)
  }

  /// `R0` seguido de cada release de pista en orden.
  pub fn all_release_refs(&self) -> impl Iterator<Item = String> {
    std::iter::once(MAIN_RELEASE_REF.to_string()).chain(self.track_release_refs())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_refs_are_one_based() {
    assert_eq!(resource_ref(0), "A1");
    assert_eq!(resource_ref(9), "A10");
    assert_eq!(track_release_ref(0), "R1");
    assert_eq!(track_release_ref(41), "R42");
  }

  #[test]
  fn test_allocator_orders_refs_by_index() {
    let refs = ReferenceAllocator::new(3);

    assert_eq!(refs.resource_refs().collect::<Vec<_>>(), ["A1", "A2", "A3"]);
    assert_eq!(refs.track_release_refs().collect::<Vec<_>>(), ["R1", "R2", "R3"]);
    assert_eq!(refs.all_release_refs().collect::<Vec<_>>(), ["R0", "R1", "R2", "R3"]);
  }

  #[test]
  fn test_allocation_is_repeatable() {
    let a: Vec<_> = ReferenceAllocator::new(5).all_release_refs().collect();
    let b: Vec<_> = ReferenceAllocator::new(5).all_release_refs().collect();
    assert_eq!(a, b);
  }
}
