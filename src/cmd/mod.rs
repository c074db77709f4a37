/// File-level count summary command.
pub mod info;
/// Record listing renderer.
pub mod print;
/// Walk and listing command.
pub mod walk;

#[cfg(test)]
mod test_support;
