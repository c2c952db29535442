//! Report section model.
//!
//! The report is a fixed, ordered list of sections. Each section names one
//! external diagnostic command; the runner in `sv-core` prints a separator
//! and a `# <label>` header, then streams the command's output through.
//!
//! The list, its order, and the filter substrings are compile-time fixed.
//! Nothing in the environment changes the structure of the report, only the
//! content each tool prints.

use std::path::{Path, PathBuf};

/// Separator line printed before every section header and once after the
/// final section.
pub const SECTION_SEPARATOR: &str = "#############################################";

/// Substrings selecting vendor, depth-camera SDK, and vision-library
/// packages in the pip listings. `hello` is the vendor package namespace.
const PIP_PACKAGE_FILTERS: &[&str] = &["hello", "realsense", "opencv"];

/// Substrings selecting depth-camera SDK and vision-library packages in the
/// apt listing.
const APT_PACKAGE_FILTERS: &[&str] = &["realsense", "opencv"];

/// One section of the version report.
#[derive(Debug, Clone)]
pub struct Section {
    /// Literal command text shown in the section header.
    pub label: &'static str,

    /// Program executed for this section.
    pub program: &'static str,

    /// Arguments passed to the program.
    pub args: &'static [&'static str],

    /// Working directory override (only the git section sets one).
    pub workdir: Option<PathBuf>,

    /// Substring filter applied to the child's stdout. `None` streams
    /// stdout through verbatim via inherited descriptors.
    pub filter: Option<&'static [&'static str]>,
}

impl Section {
    fn passthrough(label: &'static str, program: &'static str, args: &'static [&'static str]) -> Self {
        Section {
            label,
            program,
            args,
            workdir: None,
            filter: None,
        }
    }

    fn filtered(
        label: &'static str,
        program: &'static str,
        args: &'static [&'static str],
        filter: &'static [&'static str],
    ) -> Self {
        Section {
            label,
            program,
            args,
            workdir: None,
            filter: Some(filter),
        }
    }
}

/// Build the fixed ordered section list for the current environment.
///
/// Only the git section depends on the environment: it runs in the ROS
/// workspace checkout under the user's home directory. A missing home
/// resolves to a path no checkout can live at, so that section fails
/// visibly in its slot and the rest of the report is unaffected.
pub fn report_sections() -> Vec<Section> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/nonexistent"));
    sections_for_home(&home)
}

/// Build the section list with an explicit home directory.
pub fn sections_for_home(home: &Path) -> Vec<Section> {
    let ros_checkout = home.join("catkin_ws/src/stretch_ros");

    vec![
        Section::passthrough("stretch_about.py", "stretch_about.py", &[]),
        Section::passthrough("uname -a", "uname", &["-a"]),
        Section::passthrough("REx_firmware_flash.py -l", "REx_firmware_flash.py", &["-l"]),
        Section {
            label: "git log -1",
            program: "git",
            args: &["log", "-1"],
            workdir: Some(ros_checkout),
            filter: None,
        },
        Section::filtered(
            "pip2 list | grep -e hello -e realsense -e opencv",
            "pip2",
            &["list"],
            PIP_PACKAGE_FILTERS,
        ),
        Section::filtered(
            "pip3 list | grep -e hello -e realsense -e opencv",
            "pip3",
            &["list"],
            PIP_PACKAGE_FILTERS,
        ),
        Section::filtered(
            "apt list --installed | grep -e realsense -e opencv",
            "apt",
            &["list", "--installed"],
            APT_PACKAGE_FILTERS,
        ),
        Section::passthrough(
            "REx_firmware_updater.py --current",
            "REx_firmware_updater.py",
            &["--current"],
        ),
    ]
}
