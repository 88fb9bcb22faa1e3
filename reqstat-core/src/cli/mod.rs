pub mod collect;
pub mod conf;

#[cfg(test)]
mod tests;
