//! Curated seed tables: canonical hardware/OS names with relative
//! performance scores (~10-100, comparable only within a namespace).
//! These are hand-maintained fallbacks; the benchmark feed overlays them.

pub(crate) const CPU_SEED: &[(&str, f64)] = &[
    // Intel 6th Gen
    ("Intel Core i3-6100", 20.0),
    ("Intel Core i5-6400", 25.0),
    ("Intel Core i5-6500", 27.0),
    ("Intel Core i5-6600K", 30.0),
    ("Intel Core i7-6700", 33.0),
    ("Intel Core i7-6700K", 35.0),
    // Intel 7th Gen
    ("Intel Core i3-7100", 22.0),
    ("Intel Core i5-7400", 27.0),
    ("Intel Core i5-7500", 29.0),
    ("Intel Core i5-7600K", 32.0),
    ("Intel Core i7-7700", 35.0),
    ("Intel Core i7-7700K", 38.0),
    // Intel 8th Gen
    ("Intel Core i3-8100", 28.0),
    ("Intel Core i5-8400", 35.0),
    ("Intel Core i5-8600K", 40.0),
    ("Intel Core i7-8700", 43.0),
    ("Intel Core i7-8700K", 46.0),
    // Intel 9th Gen
    ("Intel Core i5-9400F", 37.0),
    ("Intel Core i5-9600K", 42.0),
    ("Intel Core i7-9700K", 50.0),
    ("Intel Core i9-9900K", 55.0),
    // Intel 10th Gen
    ("Intel Core i5-10400", 42.0),
    ("Intel Core i5-10600K", 48.0),
    ("Intel Core i7-10700K", 55.0),
    ("Intel Core i9-10900K", 60.0),
    // Intel 11th Gen
    ("Intel Core i5-11400", 47.0),
    ("Intel Core i5-11600K", 52.0),
    ("Intel Core i7-11700K", 58.0),
    ("Intel Core i9-11900K", 60.0),
    // Intel 12th Gen
    ("Intel Core i5-12400", 55.0),
    ("Intel Core i5-12600K", 65.0),
    ("Intel Core i7-12700K", 75.0),
    ("Intel Core i9-12900K", 82.0),
    // Intel 13th Gen
    ("Intel Core i5-13400", 58.0),
    ("Intel Core i5-13600K", 72.0),
    ("Intel Core i7-13700K", 82.0),
    ("Intel Core i9-13900K", 90.0),
    // Intel 14th Gen
    ("Intel Core i5-14400", 60.0),
    ("Intel Core i5-14600K", 74.0),
    ("Intel Core i7-14700K", 85.0),
    ("Intel Core i9-14900K", 95.0),
    // AMD Ryzen 1000
    ("AMD Ryzen 3 1200", 18.0),
    ("AMD Ryzen 5 1400", 22.0),
    ("AMD Ryzen 5 1600", 28.0),
    ("AMD Ryzen 7 1700", 32.0),
    ("AMD Ryzen 7 1800X", 35.0),
    // AMD Ryzen 2000
    ("AMD Ryzen 5 2600", 33.0),
    ("AMD Ryzen 7 2700X", 40.0),
    // AMD Ryzen 3000
    ("AMD Ryzen 5 3600", 45.0),
    ("AMD Ryzen 7 3700X", 52.0),
    ("AMD Ryzen 9 3900X", 60.0),
    // AMD Ryzen 5000
    ("AMD Ryzen 5 5600X", 62.0),
    ("AMD Ryzen 7 5800X", 70.0),
    ("AMD Ryzen 9 5900X", 80.0),
    ("AMD Ryzen 9 5950X", 85.0),
    // AMD Ryzen 7000
    ("AMD Ryzen 5 7600X", 75.0),
    ("AMD Ryzen 7 7700X", 82.0),
    ("AMD Ryzen 9 7900X", 90.0),
    ("AMD Ryzen 9 7950X", 100.0),
];

pub(crate) const GPU_SEED: &[(&str, f64)] = &[
    // NVIDIA GTX 1000 series
    ("NVIDIA GeForce GTX 1050", 15.0),
    ("NVIDIA GeForce GTX 1050 Ti", 18.0),
    ("NVIDIA GeForce GTX 1060 3GB", 25.0),
    ("NVIDIA GeForce GTX 1060 6GB", 28.0),
    ("NVIDIA GeForce GTX 1070", 35.0),
    ("NVIDIA GeForce GTX 1070 Ti", 38.0),
    ("NVIDIA GeForce GTX 1080", 42.0),
    ("NVIDIA GeForce GTX 1080 Ti", 50.0),
    // NVIDIA GTX 1600 series
    ("NVIDIA GeForce GTX 1650", 20.0),
    ("NVIDIA GeForce GTX 1650 Super", 25.0),
    ("NVIDIA GeForce GTX 1660", 28.0),
    ("NVIDIA GeForce GTX 1660 Super", 32.0),
    ("NVIDIA GeForce GTX 1660 Ti", 33.0),
    // NVIDIA RTX 2000 series
    ("NVIDIA GeForce RTX 2060", 38.0),
    ("NVIDIA GeForce RTX 2060 Super", 42.0),
    ("NVIDIA GeForce RTX 2070", 45.0),
    ("NVIDIA GeForce RTX 2070 Super", 50.0),
    ("NVIDIA GeForce RTX 2080", 53.0),
    ("NVIDIA GeForce RTX 2080 Super", 56.0),
    ("NVIDIA GeForce RTX 2080 Ti", 60.0),
    // NVIDIA RTX 3000 series
    ("NVIDIA GeForce RTX 3050", 32.0),
    ("NVIDIA GeForce RTX 3060", 42.0),
    ("NVIDIA GeForce RTX 3060 Ti", 50.0),
    ("NVIDIA GeForce RTX 3070", 55.0),
    ("NVIDIA GeForce RTX 3070 Ti", 58.0),
    ("NVIDIA GeForce RTX 3080", 68.0),
    ("NVIDIA GeForce RTX 3080 Ti", 72.0),
    ("NVIDIA GeForce RTX 3090", 75.0),
    ("NVIDIA GeForce RTX 3090 Ti", 78.0),
    // NVIDIA RTX 4000 series
    ("NVIDIA GeForce RTX 4060", 52.0),
    ("NVIDIA GeForce RTX 4060 Ti", 58.0),
    ("NVIDIA GeForce RTX 4070", 65.0),
    ("NVIDIA GeForce RTX 4070 Super", 70.0),
    ("NVIDIA GeForce RTX 4070 Ti", 72.0),
    ("NVIDIA GeForce RTX 4070 Ti Super", 76.0),
    ("NVIDIA GeForce RTX 4080", 82.0),
    ("NVIDIA GeForce RTX 4080 Super", 85.0),
    ("NVIDIA GeForce RTX 4090", 100.0),
    // AMD RX 5000 series
    ("AMD Radeon RX 5500 XT", 22.0),
    ("AMD Radeon RX 5600 XT", 32.0),
    ("AMD Radeon RX 5700", 38.0),
    ("AMD Radeon RX 5700 XT", 42.0),
    // AMD RX 6000 series
    ("AMD Radeon RX 6600", 38.0),
    ("AMD Radeon RX 6600 XT", 42.0),
    ("AMD Radeon RX 6700 XT", 50.0),
    ("AMD Radeon RX 6800", 58.0),
    ("AMD Radeon RX 6800 XT", 65.0),
    ("AMD Radeon RX 6900 XT", 72.0),
    // AMD RX 7000 series
    ("AMD Radeon RX 7600", 45.0),
    ("AMD Radeon RX 7700 XT", 58.0),
    ("AMD Radeon RX 7800 XT", 65.0),
    ("AMD Radeon RX 7900 XT", 80.0),
    ("AMD Radeon RX 7900 XTX", 88.0),
];

// OS scores encode release ordering within a platform family, nothing more.
// Cross-family numbers are never compared (platform gating happens first).
pub(crate) const OS_SEED: &[(&str, f64)] = &[
    ("Windows 7", 10.0),
    ("Windows 8", 15.0),
    ("Windows 8.1", 18.0),
    ("Windows 10", 40.0),
    ("Windows 11", 50.0),
    ("macOS Monterey", 30.0),
    ("macOS Ventura", 40.0),
    ("macOS Sonoma", 50.0),
    ("macOS Sequoia", 60.0),
    ("Ubuntu 22.04", 40.0),
    ("Ubuntu 24.04", 50.0),
    ("Linux Mint", 40.0),
    ("Fedora", 45.0),
    ("Arch Linux", 50.0),
    ("SteamOS", 45.0),
];
