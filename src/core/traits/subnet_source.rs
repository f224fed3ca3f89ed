use crate::core::errors::Result;
use crate::core::models::subnet::Subnet;

/// Port for retrieving the subnet inventory.
pub trait SubnetSource {
    fn fetch(&self) -> Result<Vec<Subnet>>;
}
