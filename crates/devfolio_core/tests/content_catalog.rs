use devfolio_core::{
    featured_projects, filter_projects, ContentError, ContentSource, ExperienceKind, Project,
    SiteProfile, SkillBand, SkillCategory, SkillEntry, SkillSet, StaticContentSource,
};

fn test_profile() -> SiteProfile {
    StaticContentSource::bundled().profile().clone()
}

#[test]
fn bundled_catalog_shape() {
    let content = StaticContentSource::bundled();

    assert_eq!(content.projects().len(), 9);
    assert_eq!(content.experience().len(), 5);
    assert_eq!(content.skills().cloud.len(), 8);
    assert_eq!(content.skills().frontend.len(), 7);
    assert_eq!(content.skills().backend.len(), 7);
    assert_eq!(content.skills().tools.len(), 8);
}

#[test]
fn tag_filter_preserves_source_order() {
    let content = StaticContentSource::bundled();
    let tagged = filter_projects(content.projects(), "aws");

    let ids: Vec<u32> = tagged.iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn filter_all_returns_full_sequence() {
    let content = StaticContentSource::bundled();
    assert_eq!(
        filter_projects(content.projects(), "all").len(),
        content.projects().len()
    );
    // Case-insensitive on the query side.
    assert_eq!(
        filter_projects(content.projects(), "All").len(),
        content.projects().len()
    );
    assert_eq!(filter_projects(content.projects(), "REACT").len(), 3);
}

#[test]
fn unknown_tag_yields_empty_sequence() {
    let content = StaticContentSource::bundled();
    assert!(filter_projects(content.projects(), "cobol").is_empty());
}

#[test]
fn featured_projects_come_first_in_source_order() {
    let content = StaticContentSource::bundled();
    let featured: Vec<u32> = featured_projects(content.projects())
        .iter()
        .map(|project| project.id)
        .collect();
    assert_eq!(featured, vec![1, 2, 3]);
}

#[test]
fn experience_is_served_in_source_order() {
    let content = StaticContentSource::bundled();
    let entries = content.experience();

    assert_eq!(entries[0].kind, ExperienceKind::Work);
    assert_eq!(entries[0].organization, "TechInnovate Solutions");
    assert_eq!(entries[4].kind, ExperienceKind::Education);
}

#[test]
fn experience_wire_shape_uses_type_field() {
    let content = StaticContentSource::bundled();
    let json = serde_json::to_value(&content.experience()[0]).expect("entry should serialize");
    assert_eq!(json["type"], "work");
    assert_eq!(json["period"], "2022 - Present");
}

#[test]
fn skill_bands_bucket_at_expected_thresholds() {
    assert_eq!(SkillBand::from_level(39), SkillBand::Beginner);
    assert_eq!(SkillBand::from_level(40), SkillBand::Intermediate);
    assert_eq!(SkillBand::from_level(59), SkillBand::Intermediate);
    assert_eq!(SkillBand::from_level(60), SkillBand::Advanced);
    assert_eq!(SkillBand::from_level(79), SkillBand::Advanced);
    assert_eq!(SkillBand::from_level(80), SkillBand::Expert);
    assert_eq!(SkillBand::from_level(100), SkillBand::Expert);
}

#[test]
fn skill_categories_expose_fixed_mapping() {
    let content = StaticContentSource::bundled();
    for category in SkillCategory::all() {
        assert!(
            !content.skills().category(category).is_empty(),
            "category `{}` should not be empty",
            category.as_str()
        );
    }
}

#[test]
fn from_records_rejects_duplicate_project_ids() {
    let projects = vec![
        Project::new(7, "One", "first"),
        Project::new(7, "Two", "second"),
    ];
    let err = StaticContentSource::from_records(
        projects,
        SkillSet::default(),
        Vec::new(),
        test_profile(),
    )
    .expect_err("duplicate ids must be rejected");
    assert_eq!(err, ContentError::DuplicateProjectId(7));
}

#[test]
fn from_records_rejects_out_of_range_skill_level() {
    let skills = SkillSet {
        cloud: vec![SkillEntry::new("AWS", 150)],
        ..SkillSet::default()
    };
    let err =
        StaticContentSource::from_records(Vec::new(), skills, Vec::new(), test_profile())
            .expect_err("level above 100 must be rejected");
    assert!(matches!(err, ContentError::SkillLevelOutOfRange { level: 150, .. }));
}

#[test]
fn from_records_rejects_blank_project_title() {
    let projects = vec![Project::new(1, "   ", "summary")];
    let err = StaticContentSource::from_records(
        projects,
        SkillSet::default(),
        Vec::new(),
        test_profile(),
    )
    .expect_err("blank titles must be rejected");
    assert!(matches!(err, ContentError::EmptyField { field: "title", .. }));
}

#[test]
fn bundled_catalog_passes_record_validation() {
    let content = StaticContentSource::bundled();
    StaticContentSource::from_records(
        content.projects().to_vec(),
        content.skills().clone(),
        content.experience().to_vec(),
        content.profile().clone(),
    )
    .expect("bundled records should validate");
}
