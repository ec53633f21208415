use serde::Serialize;

#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct CreateRepository<'a> {
    pub name: &'a str,
}
