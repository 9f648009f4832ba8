/// Residue position on a protein.
pub type PosType = u32;
/// E-value of a search hit.
pub type EvalueType = f64;
