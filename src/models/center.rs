/// A drop-off location shown on the Recycling Centers view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecyclingCenter {
    pub name: &'static str,
    pub address: &'static str,
}

/// Static directory; the backend has no endpoint for centers.
pub const RECYCLING_CENTERS: &[RecyclingCenter] = &[
    RecyclingCenter {
        name: "Eco Hub",
        address: "123 Green St",
    },
    RecyclingCenter {
        name: "Community Center",
        address: "456 Oak Ave",
    },
];
