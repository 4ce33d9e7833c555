use crate::core::Category;
use crate::templates::TEMPLATES;
use anyhow::Result;
use std::io::Write;

pub fn list_templates(out: &mut impl Write) -> Result<()> {
    for template in TEMPLATES {
        writeln!(out, "{} - {}", template.name, template.description)?;
        for category in Category::ALL {
            let criteria: Vec<String> = template
                .criteria(category)
                .iter()
                .map(|c| format!("{} {:.0}%", c.name, c.weight * 100.0))
                .collect();
            writeln!(out, "  {:<6} {}", format!("{category}:"), criteria.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
