//! Built-in project records.

use crate::content::ThemedText;
use crate::types::{ProjectId, ProjectLinks, ProjectRecord};

const LIVE_URL: &str = "https://example.com";
const CODE_URL: &str = "https://github.com";

struct Seed {
    id: u32,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
    image: &'static str,
    details: (&'static str, &'static str),
    technologies: &'static [&'static str],
    gallery: &'static [&'static str],
    challenges: (&'static str, &'static str),
    solutions: (&'static str, &'static str),
}

impl Seed {
    fn build(&self) -> ProjectRecord {
        let themed = |(base, alt): (&str, &str)| ThemedText::new(base, alt);
        ProjectRecord {
            id: ProjectId(self.id),
            title: themed(self.title),
            description: themed(self.description),
            details: themed(self.details),
            challenges: themed(self.challenges),
            solutions: themed(self.solutions),
            image: self.image.to_string(),
            technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
            gallery: self.gallery.iter().map(|g| g.to_string()).collect(),
            links: ProjectLinks {
                live: LIVE_URL.to_string(),
                code: CODE_URL.to_string(),
            },
        }
    }
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: ("E-Commerce Platform", "E-Commerce System Hack"),
        description: (
            "A full-stack e-commerce solution with payment integration.",
            "Secured payment gateway with encrypted transactions.",
        ),
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?q=80&w=1470&auto=format",
        details: (
            "Built with React, Node.js, and Stripe integration. Features include product search, filtering, user authentication, and order management.",
            "Engineered a secure transaction system with multi-layer encryption. Implemented advanced security protocols with minimal performance impact.",
        ),
        technologies: &["React", "Node.js", "MongoDB", "Stripe API"],
        gallery: &[
            "https://images.unsplash.com/photo-1472851294608-062f824d29cc?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?q=80&w=1364&auto=format",
            "https://images.unsplash.com/photo-1576602976047-174e57a47881?q=80&w=1469&auto=format",
        ],
        challenges: (
            "The main challenges were integrating multiple payment providers and building a responsive interface that worked across all devices.",
            "Breaking through legacy security protocols while maintaining the integrity of the transaction flow was the primary mission objective.",
        ),
        solutions: (
            "We implemented a modular architecture that allows for easy integration of new payment methods and used React's Context API for state management.",
            "Developed a custom bypass algorithm that allowed for seamless authentication while maintaining full encryption throughout the pipeline.",
        ),
    },
    Seed {
        id: 2,
        title: ("3D Portfolio Experience", "3D Neural Interface"),
        description: (
            "An interactive 3D portfolio using WebGL and Three.js.",
            "A virtual dimension built on WebGL and neural mapping.",
        ),
        image: "https://images.unsplash.com/photo-1550439062-609e1531270e?q=80&w=1470&auto=format",
        details: (
            "Interactive 3D environment that showcases projects in a virtual space. Users can navigate through different rooms representing various skills and projects.",
            "Created a digital environment that adapts to user behavior through machine learning algorithms. Neural mapping allows for intuitive navigation through complex data structures.",
        ),
        technologies: &["Three.js", "WebGL", "GSAP", "React"],
        gallery: &[
            "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1633356123669-61c9ef4b472e?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?q=80&w=1374&auto=format",
        ],
        challenges: (
            "Optimizing 3D performance across various devices while maintaining high visual quality was our biggest challenge.",
            "Creating a neural network that could accurately predict user intentions without explicit input proved to be a significant challenge.",
        ),
        solutions: (
            "We implemented level-of-detail techniques and asset optimization to ensure smooth performance even on mobile devices.",
            "Developed a proprietary AI model that analyzes cursor movements and hover patterns to predict navigation intentions with 98.7% accuracy.",
        ),
    },
    Seed {
        id: 3,
        title: ("AI-Powered Chat App", "Neural Network Chat"),
        description: (
            "A messaging platform with AI-powered response suggestions.",
            "A neural framework with predictive communication patterns.",
        ),
        image: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?q=80&w=1506&auto=format",
        details: (
            "Real-time chat application that uses AI to suggest responses and analyze sentiment. Features include group chats, file sharing, and message translation.",
            "Developed a self-adapting AI system that learns from conversation patterns and predicts optimal responses. Features quantum encryption for secure communications.",
        ),
        technologies: &["React", "Firebase", "TensorFlow.js", "WebSockets"],
        gallery: &[
            "https://images.unsplash.com/photo-1573164713988-8665fc963095?q=80&w=1469&auto=format",
            "https://images.unsplash.com/photo-1560439514-4e9645039924?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1563986768494-4dee2763ff3f?q=80&w=1470&auto=format",
        ],
        challenges: (
            "Training the AI model to provide contextually relevant suggestions while respecting privacy was a significant challenge.",
            "Creating an AI that could predict responses without compromising encrypted communications required innovative approaches.",
        ),
        solutions: (
            "We implemented on-device processing for the AI model to ensure user data never leaves their device.",
            "Developed a distributed learning system that trains across the network while maintaining zero-knowledge principles.",
        ),
    },
    Seed {
        id: 4,
        title: ("Design System Library", "Modular UI Framework"),
        description: (
            "A comprehensive component library for rapid development.",
            "A dynamic component ecosystem for rapid deployment.",
        ),
        image: "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?q=80&w=1374&auto=format",
        details: (
            "A fully documented design system with 50+ components, theming support, and accessibility features. Used by multiple teams for consistent UI development.",
            "Engineered a self-generating UI framework that adapts to usage patterns and optimizes component relationships. Utilizes machine learning for predictive styling.",
        ),
        technologies: &["React", "Storybook", "TypeScript", "SCSS"],
        gallery: &[
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?q=80&w=1364&auto=format",
            "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1529078155058-5d716f45d604?q=80&w=1469&auto=format",
        ],
        challenges: (
            "Balancing flexibility with consistency while ensuring all components meet accessibility standards was our main challenge.",
            "Creating a framework that could predict design needs while maintaining compatibility with legacy systems proved challenging.",
        ),
        solutions: (
            "We implemented a token-based design system that allows for easy theming while maintaining a consistent visual language.",
            "Developed an AI-powered styling engine that can analyze existing designs and generate compatible component variations.",
        ),
    },
    Seed {
        id: 5,
        title: ("Smart Home Dashboard", "IoT Control Node"),
        description: (
            "A centralized dashboard for smart home devices.",
            "Central command interface for networked IoT systems.",
        ),
        image: "https://images.unsplash.com/photo-1558002038-10058d7d372d?q=80&w=1470&auto=format",
        details: (
            "A responsive dashboard that allows users to control and monitor all their smart home devices from one interface. Features include automation rules, energy monitoring, and voice control.",
            "Engineered a secure control node that interfaces with all networked devices through encrypted channels. Provides real-time monitoring and predictive maintenance alerts.",
        ),
        technologies: &["React", "Node.js", "MQTT", "Chart.js"],
        gallery: &[
            "https://images.unsplash.com/photo-1585503418537-88331351ad99?q=80&w=1374&auto=format",
            "https://images.unsplash.com/photo-1581092921461-39b9d007dfb9?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1565308858095-06b1f1506d6b?q=80&w=1376&auto=format",
        ],
        challenges: (
            "Integrating with multiple device protocols and ensuring real-time updates across all connected clients was challenging.",
            "Maintaining secure communications across all nodes while allowing for easy addition of new devices required innovative security protocols.",
        ),
        solutions: (
            "We created a custom middleware layer that normalizes different device protocols into a unified API.",
            "Developed a zero-trust architecture that validates every device and command while maintaining sub-10ms latency for critical controls.",
        ),
    },
    Seed {
        id: 6,
        title: ("Fitness Tracking Platform", "Biometric Enhancement System"),
        description: (
            "A comprehensive fitness tracking and coaching app.",
            "Advanced biometric monitoring and optimization framework.",
        ),
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?q=80&w=1470&auto=format",
        details: (
            "A mobile-first platform that tracks workouts, nutrition, and progress. Features personalized workout plans, social challenges, and integration with fitness wearables.",
            "Created a system that analyzes biometric data in real-time to optimize physical performance. Uses predictive algorithms to suggest optimal training patterns.",
        ),
        technologies: &["React Native", "Firebase", "GraphQL", "TensorFlow"],
        gallery: &[
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=1470&auto=format",
            "https://images.unsplash.com/photo-1599058917765-a780eda07a3e?q=80&w=1469&auto=format",
            "https://images.unsplash.com/photo-1584735935682-2f2b69dff9d2?q=80&w=1471&auto=format",
        ],
        challenges: (
            "Creating personalized workout algorithms that adapt to user progress while remaining scientifically sound was our biggest challenge.",
            "Developing algorithms that could predict performance plateaus and recommend interventions before they occur required extensive data analysis.",
        ),
        solutions: (
            "We collaborated with fitness professionals to develop and validate our recommendation algorithms through extensive testing.",
            "Built a neural network trained on professional athlete data to identify patterns and optimize training regimens for maximum efficiency.",
        ),
    },
];

pub(super) fn records() -> Vec<ProjectRecord> {
    SEEDS.iter().map(Seed::build).collect()
}
