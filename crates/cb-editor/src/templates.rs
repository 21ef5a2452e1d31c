//! Starter layouts.
//!
//! Each template builds a fresh scene with ids starting at 1. Applying one
//! replaces the current scene as a single undoable step.

use cb_core::{LineStyle, Point, Rgb, Scene, Shape, StarEdit, StarId, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::str::FromStr;

const GOLD: Rgb = Rgb::new(0xff, 0xd7, 0x00);
const SKY: Rgb = Rgb::new(0x00, 0xbf, 0xff);
const CORAL: Rgb = Rgb::new(0xff, 0x6b, 0x6b);
const MINT: Rgb = Rgb::new(0x98, 0xfb, 0x98);
const PLUM: Rgb = Rgb::new(0xdd, 0xa0, 0xdd);
const ORANGE: Rgb = Rgb::new(0xff, 0xa5, 0x00);

const LEVEL_COLORS: [Rgb; 5] = [GOLD, SKY, CORAL, MINT, PLUM];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    MindMap,
    OrgChart,
    FlowChart,
    Project,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::MindMap,
        Template::OrgChart,
        Template::FlowChart,
        Template::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::MindMap => "mindmap",
            Template::OrgChart => "orgchart",
            Template::FlowChart => "flowchart",
            Template::Project => "project",
        }
    }

    /// Build the layout. Only the org chart draws from `rng`.
    pub fn build<R: Rng + ?Sized>(self, style: LineStyle, rng: &mut R) -> Scene {
        let mut scene = Scene::new();
        match self {
            Template::MindMap => mind_map(&mut scene, style),
            Template::OrgChart => org_chart(&mut scene, style, rng),
            Template::FlowChart => flow_chart(&mut scene, style),
            Template::Project => project(&mut scene, style),
        }
        scene
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown template `{s}`"))
    }
}

fn place(
    scene: &mut Scene,
    at: Point,
    color: Rgb,
    title: &str,
    description: String,
    tags: String,
    shape: Shape,
) -> StarId {
    let id = scene.add_star(at, color).id;
    scene.update_star(
        id,
        &StarEdit {
            title: Some(title.to_string()),
            description: Some(description),
            tags: Some(tags),
            shape: Some(shape),
        },
    );
    id
}

// ─── Layouts ─────────────────────────────────────────────────────────────

fn mind_map(scene: &mut Scene, style: LineStyle) {
    const BRANCHES: [&str; 6] = ["Project", "Research", "Development", "Design", "Marketing", "Testing"];
    const COLORS: [Rgb; 4] = [GOLD, SKY, CORAL, MINT];
    const RADIUS: f64 = 250.0;

    let center = Point::new(400.0, 300.0);
    let hub = place(
        scene,
        center,
        Rgb::WHITE,
        "Main Goal",
        "Central objective".into(),
        "goal, main".into(),
        Shape::Star,
    );

    for (i, name) in BRANCHES.iter().enumerate() {
        let angle = i as f64 / BRANCHES.len() as f64 * TAU - FRAC_PI_2;
        let at = center + RADIUS * Vec2::from_angle(angle);
        let color = COLORS[i % COLORS.len()];
        let lower = name.to_lowercase();
        let id = place(
            scene,
            at,
            color,
            name,
            format!("Key aspect: {lower}"),
            lower,
            Shape::Circle,
        );
        scene.add_connection(hub, id, color, style);
    }
}

fn org_chart<R: Rng + ?Sized>(scene: &mut Scene, style: LineStyle, rng: &mut R) {
    const LEVELS: [&str; 5] = ["CEO", "VP", "Manager", "Team", "Member"];
    const SHAPES: [Shape; 3] = [Shape::Circle, Shape::Diamond, Shape::Hexagon];
    const WIDTH: f64 = 800.0;

    let mut previous: Vec<StarId> = Vec::new();
    for (level, name) in LEVELS.iter().enumerate() {
        let count: usize = rng.random_range(1..=3);
        let y = 100.0 + level as f64 * 120.0;
        let lower = name.to_lowercase();
        let mut current = Vec::with_capacity(count);
        for i in 0..count {
            let x = WIDTH / (count + 1) as f64 * (i + 1) as f64;
            let id = place(
                scene,
                Point::new(x, y),
                LEVEL_COLORS[level],
                &format!("{name} {}", i + 1),
                format!("{name} position"),
                lower.clone(),
                SHAPES[level % SHAPES.len()],
            );
            if !previous.is_empty() {
                let parent = previous[i * previous.len() / count];
                scene.add_connection(parent, id, Rgb::WHITE, style);
            }
            current.push(id);
        }
        previous = current;
    }
}

fn flow_chart(scene: &mut Scene, style: LineStyle) {
    const STEPS: [&str; 6] = ["Start", "Decision", "Process", "Review", "Approval", "End"];
    const COLORS: [Rgb; 6] = [MINT, GOLD, SKY, CORAL, PLUM, ORANGE];

    let mut last: Option<StarId> = None;
    for (i, name) in STEPS.iter().enumerate() {
        let shape = if i == 1 || i == 3 { Shape::Diamond } else { Shape::Circle };
        let id = place(
            scene,
            Point::new(100.0 + i as f64 * 150.0, 300.0),
            COLORS[i],
            name,
            format!("Process step {}", i + 1),
            format!("process, {}", name.to_lowercase()),
            shape,
        );
        if let Some(prev) = last {
            scene.add_connection(prev, id, Rgb::WHITE, style);
        }
        last = Some(id);
    }
}

fn project(scene: &mut Scene, style: LineStyle) {
    const PARTS: [(&str, f64, f64); 5] = [
        ("Goals", 200.0, 200.0),
        ("Milestones", 600.0, 200.0),
        ("Tasks", 200.0, 500.0),
        ("Resources", 600.0, 500.0),
        ("Risks", 400.0, 350.0),
    ];

    let ids: Vec<StarId> = PARTS
        .iter()
        .enumerate()
        .map(|(i, (name, x, y))| {
            let lower = name.to_lowercase();
            place(
                scene,
                Point::new(*x, *y),
                LEVEL_COLORS[i],
                name,
                format!("Project {lower}"),
                format!("project, {lower}"),
                Shape::ALL[i % Shape::ALL.len()],
            )
        })
        .collect();

    if let Some((&hub, spokes)) = ids.split_last() {
        for &spoke in spokes {
            scene.add_connection(spoke, hub, Rgb::WHITE, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn build(template: Template) -> Scene {
        template.build(LineStyle::Dashed, &mut SmallRng::seed_from_u64(11))
    }

    #[test]
    fn mind_map_is_a_hub_with_six_branches() {
        let scene = build(Template::MindMap);
        assert_eq!(scene.star_count(), 7);
        assert_eq!(scene.connection_count(), 6);
        assert_eq!(scene.degree(StarId(1)), 6);

        let hub = scene.star(StarId(1)).unwrap();
        assert_eq!(hub.title, "Main Goal");
        assert_eq!(hub.shape, Shape::Star);
        assert_eq!(hub.tags.as_slice(), ["goal", "main"]);

        // First branch sits straight above the hub
        let project = scene.star(StarId(2)).unwrap();
        assert!((project.x - 400.0).abs() < 1e-9);
        assert!((project.y - 50.0).abs() < 1e-9);
        assert_eq!(project.description, "Key aspect: project");
        assert_eq!(project.color, GOLD);

        let conn = &scene.connections()[0];
        assert_eq!(conn.color, GOLD);
        assert_eq!(conn.style, LineStyle::Dashed);
    }

    #[test]
    fn org_chart_links_every_level_to_the_one_above() {
        for seed in 0..20 {
            let scene = Template::OrgChart.build(LineStyle::Solid, &mut SmallRng::seed_from_u64(seed));
            assert!((5..=15).contains(&scene.star_count()));
            // A tree: one edge per non-root star
            assert_eq!(scene.connection_count(), scene.star_count() - 1);
            let ceo = scene.star(StarId(1)).unwrap();
            assert_eq!((ceo.y, ceo.shape), (100.0, Shape::Circle));
            assert!(ceo.title.starts_with("CEO "));
            for star in scene.stars().iter().skip(1) {
                assert!(scene.degree(star.id) >= 1);
            }
        }
    }

    #[test]
    fn flow_chart_is_a_chain() {
        let scene = build(Template::FlowChart);
        assert_eq!(scene.star_count(), 6);
        assert_eq!(scene.connection_count(), 5);
        let decision = scene.star(StarId(2)).unwrap();
        assert_eq!(decision.shape, Shape::Diamond);
        assert_eq!(decision.x, 250.0);
        assert_eq!(decision.tags.as_slice(), ["process", "decision"]);
        assert!(scene.has_connection(StarId(5), StarId(6)));
        assert!(!scene.has_connection(StarId(1), StarId(6)));
    }

    #[test]
    fn project_spokes_meet_at_risks() {
        let scene = build(Template::Project);
        assert_eq!(scene.star_count(), 5);
        assert_eq!(scene.degree(StarId(5)), 4);
        assert_eq!(scene.star(StarId(5)).unwrap().title, "Risks");
        assert_eq!(scene.star(StarId(4)).unwrap().shape, Shape::Star);
        assert_eq!(scene.next_star_id(), StarId(6));
    }

    #[test]
    fn names_parse() {
        for template in Template::ALL {
            assert_eq!(template.as_str().parse::<Template>(), Ok(template));
        }
        assert!("kanban".parse::<Template>().is_err());
    }
}
