use super::entities::{PersonalInfo, PortfolioDocument, Skill, SkillCategory};

fn category(
    id: &str,
    title: &str,
    icon: &str,
    color: &str,
    skills: &[(&str, &str, i32, u32)],
) -> SkillCategory {
    SkillCategory {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        skills: skills
            .iter()
            .map(|(skill_id, name, level, projects)| Skill {
                id: skill_id.to_string(),
                name: name.to_string(),
                level: *level,
                projects: *projects,
                category: id.to_string(),
            })
            .collect(),
    }
}

/// Document written on first start when no file exists yet.
pub fn default_document() -> PortfolioDocument {
    PortfolioDocument {
        personal_info: PersonalInfo {
            name: "Portfolio Owner".to_string(),
            title: "Engineer".to_string(),
            subtitle: "Edit this profile from the admin panel".to_string(),
            email: "owner@example.com".to_string(),
            phone: String::new(),
            location: String::new(),
            linkedin: String::new(),
            photo: "/placeholder-photo.png".to_string(),
        },
        skill_categories: vec![
            category(
                "programming",
                "Programming & Scripting",
                "Code",
                "text-blue-600",
                &[
                    ("1", "Python", 90, 15),
                    ("2", "Arduino IDE", 95, 20),
                    ("3", "C/C++", 80, 8),
                    ("4", "MATLAB", 75, 6),
                ],
            ),
            category(
                "design",
                "Mechanical Design",
                "Wrench",
                "text-green-600",
                &[
                    ("5", "SolidWorks", 90, 12),
                    ("6", "CorelDRAW", 85, 10),
                    ("7", "AutoCAD", 80, 8),
                    ("8", "3D Printing", 95, 25),
                ],
            ),
            category(
                "electronics",
                "Electronics & PCB",
                "Cpu",
                "text-purple-600",
                &[
                    ("9", "Altium Designer", 85, 10),
                    ("10", "Proteus", 90, 15),
                    ("11", "LTspice", 80, 8),
                    ("12", "KiCad", 75, 6),
                ],
            ),
            category(
                "iot",
                "IoT & Microcontrollers",
                "Zap",
                "text-orange-600",
                &[
                    ("13", "ESP32", 95, 18),
                    ("14", "Raspberry Pi", 90, 12),
                    ("15", "Arduino", 95, 22),
                    ("16", "STM32", 80, 6),
                ],
            ),
        ],
        projects: vec![],
        experiences: vec![],
        timeline: vec![],
        courses: vec![],
        volunteering: vec![],
        activities: vec![],
        competitions: vec![],
        awards: vec![],
        testimonials: vec![],
    }
}
