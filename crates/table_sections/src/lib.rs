// crates/table_sections/src/lib.rs

use once_cell::sync::Lazy;

/// Describes one attachment table section inside the project details page.
///
/// `data_var` names the form-data field the section renders from; it is
/// carried for reference only and never dereferenced. `single` marks
/// sections that hold one attachment instead of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub title: &'static str,
    pub key: &'static str,
    pub data_var: &'static str,
    pub single: bool,
}

impl SectionDescriptor {
    fn collection(title: &'static str, key: &'static str, data_var: &'static str) -> Self {
        SectionDescriptor {
            title,
            key,
            data_var,
            single: false,
        }
    }

    fn single(title: &'static str, key: &'static str, data_var: &'static str) -> Self {
        SectionDescriptor {
            title,
            key,
            data_var,
            single: true,
        }
    }
}

/// The table sections of ProjectDetails.tsx, in the order they appear on
/// the page. Output order follows this declaration order.
static SECTIONS: Lazy<Vec<SectionDescriptor>> = Lazy::new(|| {
    vec![
        SectionDescriptor::collection("Gallery Images", "gallery", "formData.gallery_image"),
        SectionDescriptor::collection("Floor Plan", "floor_plan", "formData.two_d_images"),
        SectionDescriptor::single("Brochure", "brochure", "formData.brochure"),
        SectionDescriptor::single("Project PPT", "ppt", "formData.Project_PPT"),
        SectionDescriptor::collection("Project Layout", "layout", "formData.project_layout"),
        SectionDescriptor::collection("Project Creatives", "creatives", "formData.project_creatives"),
        SectionDescriptor::collection(
            "Project Creatives Generics",
            "creative_generics",
            "formData.project_creative_generics",
        ),
        SectionDescriptor::collection(
            "Project Creatives Offers",
            "creative_offers",
            "formData.project_creative_offers",
        ),
        SectionDescriptor::collection("Project Interiors", "interiors", "formData.project_interiors"),
        SectionDescriptor::collection("Project Exteriors", "exteriors", "formData.project_exteriors"),
        SectionDescriptor::collection(
            "Project Emailer Template",
            "emailer",
            "formData.project_emailer_templetes",
        ),
        SectionDescriptor::collection("Videos", "videos", "formData.videos"),
    ]
});

/// Returns the built-in section list.
pub fn sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

/// The target markup pattern for one section: a title heading, a scrollable
/// wrapper, the four fixed header columns, and an empty body placeholder.
pub const TABLE_TEMPLATE: &str = r#"<h5 className=" ">Section Title</h5>
<div className="tbl-container w-100">
  <table className="w-100">
    <thead>
      <tr>
        <th>File Name</th>
        <th>File Type</th>
        <th>Updated At</th>
        <th>Image</th>
      </tr>
    </thead>
    <tbody>
      {/* rows */}
    </tbody>
  </table>
</div>"#;

/// Formats the section checklist: a header line followed by one
/// `  - <title>` line per descriptor, in declaration order.
pub fn render_section_list(sections: &[SectionDescriptor]) -> String {
    let mut output = String::from("Table sections found:\n");
    for section in sections {
        output.push_str(&format!("  - {}\n", section.title));
    }
    output
}

/// Assembles the full report printed by the tool: purpose preamble, the
/// section checklist, and the markup template block.
pub fn render_report(sections: &[SectionDescriptor]) -> String {
    let mut output = String::new();
    output.push_str("This script lists the attachment table sections in src/pages/ProjectDetails.tsx.\n");
    output.push_str("Each listed section needs the scrollable table markup applied by hand.\n");
    output.push('\n');
    output.push_str(&render_section_list(sections));
    output.push('\n');
    output.push_str("Update each section to match this pattern:\n");
    output.push_str(TABLE_TEMPLATE);
    output.push('\n');
    output
}
