/// Index of a material in the scene material table.
///
/// Shading is done by the caller, shapes only carry the id around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(pub usize);

/// A named entry of the material table.
#[derive(Debug, Clone)]
pub struct MaterialDescriptor {
    pub label: Option<String>,
}
