use serde_json::json;

use crate::portfolio::application::domain::default_document::default_document;
use crate::portfolio::application::domain::entities::{
    Award, PersonalInfo, PortfolioDocument, Project, Testimonial,
};

pub fn project(id: &str, created_at: &str) -> Project {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "Line-following robot",
        "technologies": ["Arduino", "C++"],
        "image": "/uploads/images/1-robot.png",
        "status": "Completed",
        "createdAt": created_at,
        "updatedAt": created_at
    }))
    .expect("project fixture")
}

pub fn award(id: &str) -> Award {
    serde_json::from_value(json!({
        "id": id,
        "title": "Best Hardware Hack",
        "date": "2023",
        "description": "Regional hackathon",
        "createdAt": "2023-06-01T00:00:00Z",
        "updatedAt": "2023-06-01T00:00:00Z"
    }))
    .expect("award fixture")
}

pub fn testimonial(id: &str, rating: i32) -> Testimonial {
    serde_json::from_value(json!({
        "id": id,
        "name": "Grace",
        "title": "Mentor",
        "company": "Makerspace",
        "text": "Ships working prototypes.",
        "rating": rating,
        "createdAt": "2023-07-01T00:00:00Z",
        "updatedAt": "2023-07-01T00:00:00Z"
    }))
    .expect("testimonial fixture")
}

/// Default document with a named owner, two projects (newest first), one
/// award and one testimonial.
pub fn sample_document() -> PortfolioDocument {
    let mut doc = default_document();
    doc.personal_info = PersonalInfo {
        name: "Ada Builder".to_string(),
        title: "Mechatronics Engineer".to_string(),
        email: "ada@example.com".to_string(),
        ..PersonalInfo::default()
    };
    doc.projects = vec![
        project("p-2024", "2024-03-01T00:00:00Z"),
        project("p-2022", "2022-03-01T00:00:00Z"),
    ];
    doc.awards = vec![award("a1")];
    doc.testimonials = vec![testimonial("t1", 5)];
    doc
}
