//! Domain constants for the package index.

/// Rendered documentation site for the package.
pub const DOC_URL: &str = "https://jfraxanet.github.io/Topo_LR_Kitaev_AAH/";

/// Source repository the documentation pages link back to.
pub const GIT_URL: &str = "https://github.com/jfraxanet/Topo_LR_Kitaev_AAH/tree/master/";

/// Physical module files the package is distributed as, in declared order.
pub const MODULE_FILES: [&str; 2] = ["Hamiltonians.py", "Winding_num.py"];
