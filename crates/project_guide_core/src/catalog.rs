//! crates/project_guide_core/src/catalog.rs
//!
//! The fixed content the guide draws its answers from. Everything here is
//! built once at startup and never mutated afterwards.

use crate::domain::{
    DevelopmentPhase, Difficulty, Domain, LearningResource, ProjectIdea, ResourceKind, TechItem,
    TechRecommendation,
};

/// Read-only access to the built-in project ideas, phases, technologies and resources.
#[derive(Debug, Clone)]
pub struct Catalog {
    project_ideas: Vec<ProjectIdea>,
    development_phases: Vec<DevelopmentPhase>,
    tech_recommendation: TechRecommendation,
    learning_resources: Vec<LearningResource>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Builds the catalog compiled into the program.
    pub fn builtin() -> Self {
        Self {
            project_ideas: builtin_project_ideas(),
            development_phases: builtin_development_phases(),
            tech_recommendation: builtin_tech_recommendation(),
            learning_resources: builtin_learning_resources(),
        }
    }

    /// One entry per domain.
    pub fn project_ideas(&self) -> &[ProjectIdea] {
        &self.project_ideas
    }

    /// Ordered by position in the project lifecycle.
    pub fn development_phases(&self) -> &[DevelopmentPhase] {
        &self.development_phases
    }

    pub fn tech_recommendation(&self) -> &TechRecommendation {
        &self.tech_recommendation
    }

    pub fn learning_resources(&self) -> &[LearningResource] {
        &self.learning_resources
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resource(title: &str, kind: ResourceKind, difficulty: Difficulty) -> LearningResource {
    LearningResource {
        title: title.to_string(),
        kind,
        url: "#".to_string(),
        difficulty,
    }
}

fn builtin_project_ideas() -> Vec<ProjectIdea> {
    vec![
        ProjectIdea {
            id: "1".to_string(),
            title: "Smart Home Automation System".to_string(),
            domain: Domain::Iot,
            difficulty: Difficulty::Intermediate,
            description: "Build a comprehensive home automation system with sensor monitoring, device control, and mobile app interface.".to_string(),
            tech_stack: strings(&["Arduino/ESP32", "React Native", "Node.js", "MQTT", "Firebase"]),
            estimated_time: "8-12 weeks".to_string(),
            learning_outcomes: strings(&[
                "IoT protocols",
                "Sensor integration",
                "Mobile app development",
                "Real-time communication",
            ]),
        },
        ProjectIdea {
            id: "2".to_string(),
            title: "Intelligent Traffic Management System".to_string(),
            domain: Domain::AiMl,
            difficulty: Difficulty::Advanced,
            description: "Develop an AI-powered traffic management system using computer vision for vehicle detection and traffic optimization.".to_string(),
            tech_stack: strings(&["Python", "OpenCV", "TensorFlow", "Flask", "PostgreSQL"]),
            estimated_time: "12-16 weeks".to_string(),
            learning_outcomes: strings(&[
                "Computer vision",
                "Machine learning",
                "Real-time processing",
                "System optimization",
            ]),
        },
        ProjectIdea {
            id: "3".to_string(),
            title: "Gesture-Controlled Robot".to_string(),
            domain: Domain::EmbeddedSystems,
            difficulty: Difficulty::Intermediate,
            description: "Create a robot that responds to hand gestures using computer vision and embedded control systems.".to_string(),
            tech_stack: strings(&["Raspberry Pi", "Python", "OpenCV", "Arduino", "Servo Motors"]),
            estimated_time: "6-10 weeks".to_string(),
            learning_outcomes: strings(&[
                "Embedded programming",
                "Computer vision",
                "Motor control",
                "Real-time systems",
            ]),
        },
        ProjectIdea {
            id: "4".to_string(),
            title: "E-Learning Platform with AI Tutor".to_string(),
            domain: Domain::WebDevelopment,
            difficulty: Difficulty::Advanced,
            description: "Build a comprehensive e-learning platform with an AI-powered virtual tutor for personalized learning experiences.".to_string(),
            tech_stack: strings(&["React", "Node.js", "MongoDB", "Python", "NLP Libraries"]),
            estimated_time: "10-14 weeks".to_string(),
            learning_outcomes: strings(&[
                "Full-stack development",
                "AI integration",
                "User experience design",
                "Content management",
            ]),
        },
    ]
}

fn builtin_development_phases() -> Vec<DevelopmentPhase> {
    vec![
        DevelopmentPhase {
            id: "1".to_string(),
            title: "Project Planning & Research".to_string(),
            description: "Define project scope, research technologies, and create detailed specifications.".to_string(),
            tasks: strings(&[
                "Define project requirements and objectives",
                "Research existing solutions and technologies",
                "Create project timeline and milestones",
                "Set up development environment",
                "Design system architecture",
            ]),
            estimated_time: "1-2 weeks".to_string(),
            resources: vec![
                resource("Project Planning Guide", ResourceKind::Tutorial, Difficulty::Beginner),
                resource(
                    "System Design Principles",
                    ResourceKind::Documentation,
                    Difficulty::Intermediate,
                ),
            ],
        },
        DevelopmentPhase {
            id: "2".to_string(),
            title: "Prototype Development".to_string(),
            description: "Build a minimal viable prototype to validate core concepts and functionality.".to_string(),
            tasks: strings(&[
                "Implement core functionality",
                "Create basic user interface",
                "Test critical components",
                "Gather initial feedback",
                "Iterate on design",
            ]),
            estimated_time: "3-4 weeks".to_string(),
            resources: vec![
                resource(
                    "Rapid Prototyping Techniques",
                    ResourceKind::Video,
                    Difficulty::Intermediate,
                ),
                resource("MVP Development Guide", ResourceKind::Course, Difficulty::Beginner),
            ],
        },
    ]
}

fn builtin_tech_recommendation() -> TechRecommendation {
    let item = |name: &str, description: &str, difficulty, url: &str| TechItem {
        name: name.to_string(),
        description: description.to_string(),
        difficulty,
        documentation_url: url.to_string(),
    };

    TechRecommendation {
        category: "Web Development".to_string(),
        items: vec![
            item(
                "React",
                "Modern JavaScript library for building user interfaces",
                Difficulty::Intermediate,
                "https://reactjs.org/docs",
            ),
            item(
                "Node.js",
                "JavaScript runtime for server-side development",
                Difficulty::Beginner,
                "https://nodejs.org/docs",
            ),
            item(
                "MongoDB",
                "NoSQL database for modern applications",
                Difficulty::Beginner,
                "https://docs.mongodb.com",
            ),
        ],
    }
}

fn builtin_learning_resources() -> Vec<LearningResource> {
    vec![
        resource(
            "Complete Web Development Course",
            ResourceKind::Course,
            Difficulty::Beginner,
        ),
        resource(
            "React Documentation",
            ResourceKind::Documentation,
            Difficulty::Intermediate,
        ),
        resource(
            "JavaScript Fundamentals",
            ResourceKind::Tutorial,
            Difficulty::Beginner,
        ),
    ]
}
