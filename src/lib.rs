// Root app shell and re-exports for workspace crates used by bins.
pub use client_core as client;
pub use client_runtime as runtime;
pub use data_runtime as data;
pub use platform_winit;
