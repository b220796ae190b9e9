//! Bundled content tables.
//!
//! Plain configuration content consumed as-is by [`super::StaticContentSource`];
//! no logic lives here beyond record construction.

use super::SiteProfile;
use crate::model::experience::{ExperienceEntry, ExperienceKind};
use crate::model::project::Project;
use crate::model::skill::{SkillEntry, SkillSet};

fn project(
    id: u32,
    title: &str,
    description: &str,
    image: &str,
    tags: &[&str],
    demo_url: Option<&str>,
    source_url: &str,
    featured: bool,
    highlights: &[&str],
) -> Project {
    let mut record = Project::new(id, title, description);
    record.image = Some(image.to_string());
    record.tags = tags.iter().map(|tag| tag.to_string()).collect();
    record.demo_url = demo_url.map(str::to_string);
    record.source_url = Some(source_url.to_string());
    record.featured = featured;
    record.highlights = highlights.iter().map(|line| line.to_string()).collect();
    record
}

fn skill(name: &str, level: u8, icon: &str, description: &str) -> SkillEntry {
    let mut entry = SkillEntry::new(name, level);
    entry.icon = Some(icon.to_string());
    entry.description = Some(description.to_string());
    entry
}

fn experience_entry(
    kind: ExperienceKind,
    title: &str,
    organization: &str,
    period: &str,
    description: &str,
    achievements: &[&str],
    technologies: &[&str],
) -> ExperienceEntry {
    let mut entry = ExperienceEntry::new(kind, title, organization, period, description);
    entry.achievements = achievements.iter().map(|line| line.to_string()).collect();
    entry.technologies = technologies.iter().map(|name| name.to_string()).collect();
    entry
}

pub(super) fn profile() -> SiteProfile {
    SiteProfile {
        site_title: "Sam DevOps | Cloud Engineer & Frontend Developer".to_string(),
        site_description: "Professional portfolio of Sam DevOps, a Cloud Engineer and Frontend \
                           Developer specializing in AWS infrastructure and React applications."
            .to_string(),
        contact_email: "contact@samdevops.com".to_string(),
        github_url: "https://github.com/samdevops".to_string(),
        linkedin_url: "https://linkedin.com/in/samdevops".to_string(),
        resume_path: "/files/sam-devops-resume.pdf".to_string(),
    }
}

pub(super) fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Serverless E-commerce Platform",
            "Built a fully serverless e-commerce platform using AWS Lambda, API Gateway, \
             DynamoDB, and S3. Implemented secure authentication with Cognito and payment \
             processing with Stripe.",
            "/images/projects/serverless-ecommerce.jpg",
            &["aws", "serverless", "react", "dynamodb"],
            Some("https://ecommerce-demo.samdevops.com"),
            "https://github.com/samdevops/serverless-ecommerce",
            true,
            &[
                "Reduced operational costs by 65% compared to traditional server-based architecture",
                "Implemented automated CI/CD pipeline with AWS CodePipeline",
                "Achieved 99.99% uptime with fault-tolerant design",
            ],
        ),
        project(
            2,
            "Container Orchestration Platform",
            "Designed and implemented a Kubernetes-based container orchestration platform for \
             microservices deployment. Set up auto-scaling, health monitoring, and zero-downtime \
             deployments.",
            "/images/projects/container-platform.jpg",
            &["kubernetes", "docker", "devops", "aws"],
            Some("https://k8s-demo.samdevops.com"),
            "https://github.com/samdevops/k8s-platform",
            true,
            &[
                "Reduced deployment time from hours to minutes",
                "Implemented Infrastructure as Code using Terraform",
                "Set up comprehensive monitoring with Prometheus and Grafana",
            ],
        ),
        project(
            3,
            "Real-time Analytics Dashboard",
            "Developed a real-time analytics dashboard using React, D3.js, and WebSockets. \
             Integrated with AWS Kinesis for data streaming and processing.",
            "/images/projects/analytics-dashboard.jpg",
            &["react", "aws", "d3js", "websockets"],
            Some("https://analytics.samdevops.com"),
            "https://github.com/samdevops/analytics-dashboard",
            true,
            &[
                "Visualized complex data sets with interactive charts",
                "Implemented real-time updates with minimal latency",
                "Built responsive UI that works across devices",
            ],
        ),
        project(
            4,
            "Multi-Region Infrastructure",
            "Architected a multi-region AWS infrastructure for a high-availability SaaS \
             application. Implemented global load balancing, data replication, and disaster \
             recovery procedures.",
            "/images/projects/multi-region.jpg",
            &["aws", "devops", "terraform", "high-availability"],
            None,
            "https://github.com/samdevops/multi-region-infra",
            false,
            &[
                "Achieved 99.999% availability with cross-region failover",
                "Implemented secure data replication across regions",
                "Created comprehensive disaster recovery playbooks",
            ],
        ),
        project(
            5,
            "CI/CD Pipeline Automation",
            "Built a comprehensive CI/CD pipeline using GitHub Actions, AWS CodePipeline, and \
             Terraform. Implemented automated testing, security scanning, and deployment to \
             multiple environments.",
            "/images/projects/cicd-pipeline.jpg",
            &["devops", "github-actions", "aws", "terraform"],
            None,
            "https://github.com/samdevops/cicd-automation",
            false,
            &[
                "Reduced deployment errors by 90% with automated validation",
                "Implemented security scanning at every stage of the pipeline",
                "Achieved consistent deployments across all environments",
            ],
        ),
        project(
            6,
            "Cloud Cost Optimization Tool",
            "Developed a tool to analyze and optimize AWS cloud costs. Identifies unused \
             resources, recommends right-sizing, and implements automated cost-saving measures.",
            "/images/projects/cost-optimization.jpg",
            &["aws", "python", "serverless", "devops"],
            Some("https://cost-optimizer.samdevops.com"),
            "https://github.com/samdevops/cloud-cost-optimizer",
            false,
            &[
                "Reduced monthly cloud spend by 30% for enterprise clients",
                "Implemented automated resource scheduling based on usage patterns",
                "Created comprehensive cost allocation reporting by team and service",
            ],
        ),
        project(
            7,
            "Serverless File Processor",
            "Built a scalable serverless solution for processing large files using AWS Lambda, \
             S3, and Step Functions. Handles image processing, document conversion, and data \
             extraction.",
            "/images/projects/file-processor.jpg",
            &["aws", "serverless", "lambda", "s3"],
            None,
            "https://github.com/samdevops/serverless-file-processor",
            false,
            &[
                "Processes thousands of files per minute with automatic scaling",
                "Implemented event-driven architecture for efficient resource usage",
                "Added comprehensive error handling and retry mechanisms",
            ],
        ),
        project(
            8,
            "React Component Library",
            "Created a reusable React component library with Storybook documentation. Includes \
             form components, data visualization, and UI elements with comprehensive testing.",
            "/images/projects/component-library.jpg",
            &["react", "storybook", "typescript", "frontend"],
            Some("https://components.samdevops.com"),
            "https://github.com/samdevops/react-component-library",
            false,
            &[
                "Built 50+ reusable components with comprehensive documentation",
                "Implemented accessibility standards (WCAG 2.1 AA)",
                "Created automated visual regression testing with Chromatic",
            ],
        ),
        project(
            9,
            "Infrastructure Monitoring Solution",
            "Set up comprehensive infrastructure monitoring using Prometheus, Grafana, and ELK \
             stack. Includes alerting, log aggregation, and performance dashboards.",
            "/images/projects/monitoring.jpg",
            &["devops", "prometheus", "grafana", "elk"],
            Some("https://monitoring-demo.samdevops.com"),
            "https://github.com/samdevops/infrastructure-monitoring",
            false,
            &[
                "Reduced incident response time by 70% with proactive alerting",
                "Created custom dashboards for different stakeholders",
                "Implemented automated anomaly detection with machine learning",
            ],
        ),
    ]
}

pub(super) fn skills() -> SkillSet {
    SkillSet {
        cloud: vec![
            skill(
                "AWS",
                95,
                "aws",
                "AWS Certified Solutions Architect Professional with 5+ years of experience.",
            ),
            skill(
                "Azure",
                75,
                "azure",
                "Experienced with Azure cloud services and infrastructure deployment.",
            ),
            skill(
                "GCP",
                70,
                "gcp",
                "Familiar with Google Cloud Platform services and deployment.",
            ),
            skill(
                "Terraform",
                90,
                "terraform",
                "Expert in Infrastructure as Code using Terraform.",
            ),
            skill(
                "Docker",
                92,
                "docker",
                "Extensive experience with containerization and Docker optimization.",
            ),
            skill(
                "Kubernetes",
                85,
                "kubernetes",
                "Proficient in Kubernetes orchestration and management.",
            ),
            skill(
                "CI/CD",
                88,
                "cicd",
                "Expert in building automated CI/CD pipelines.",
            ),
            skill(
                "Serverless",
                90,
                "serverless",
                "Specialist in serverless architecture and implementation.",
            ),
        ],
        frontend: vec![
            skill(
                "React",
                90,
                "react",
                "Advanced React development including hooks, context, and state management.",
            ),
            skill(
                "TypeScript",
                85,
                "typescript",
                "Strong TypeScript skills with focus on type safety.",
            ),
            skill(
                "JavaScript",
                92,
                "javascript",
                "Expert in modern JavaScript including ES6+ features.",
            ),
            skill(
                "HTML/CSS",
                90,
                "html",
                "Advanced HTML5 and CSS3 including animations and responsive design.",
            ),
            skill(
                "Tailwind CSS",
                88,
                "tailwind",
                "Proficient with utility-first CSS using Tailwind.",
            ),
            skill(
                "Redux",
                82,
                "redux",
                "Experienced with Redux state management patterns.",
            ),
            skill(
                "Next.js",
                80,
                "nextjs",
                "Familiar with Next.js server-side rendering and static generation.",
            ),
        ],
        backend: vec![
            skill(
                "Node.js",
                88,
                "nodejs",
                "Extensive experience building Node.js applications and APIs.",
            ),
            skill(
                "Python",
                85,
                "python",
                "Proficient in Python for scripting, automation, and backend development.",
            ),
            skill(
                "GraphQL",
                78,
                "graphql",
                "Experienced with GraphQL API design and implementation.",
            ),
            skill(
                "REST API",
                92,
                "api",
                "Expert in designing and building RESTful APIs.",
            ),
            skill(
                "DynamoDB",
                85,
                "dynamodb",
                "Advanced knowledge of NoSQL database design with DynamoDB.",
            ),
            skill(
                "PostgreSQL",
                80,
                "postgresql",
                "Proficient with PostgreSQL database design and optimization.",
            ),
            skill(
                "MongoDB",
                75,
                "mongodb",
                "Experienced with MongoDB document database.",
            ),
        ],
        tools: vec![
            skill(
                "Git",
                90,
                "git",
                "Advanced Git version control workflow management.",
            ),
            skill(
                "GitHub Actions",
                85,
                "github",
                "Proficient with GitHub Actions for CI/CD automation.",
            ),
            skill(
                "AWS CDK",
                82,
                "awscdk",
                "Experienced with AWS Cloud Development Kit for infrastructure as code.",
            ),
            skill(
                "Jenkins",
                78,
                "jenkins",
                "Skilled in Jenkins pipeline creation and management.",
            ),
            skill(
                "Prometheus",
                80,
                "prometheus",
                "Proficient with Prometheus monitoring and alerting.",
            ),
            skill(
                "Grafana",
                82,
                "grafana",
                "Experienced building Grafana dashboards for metrics visualization.",
            ),
            skill(
                "ELK Stack",
                75,
                "elk",
                "Familiar with Elasticsearch, Logstash, and Kibana for log management.",
            ),
            skill(
                "Jira",
                85,
                "jira",
                "Proficient with Jira for project management and issue tracking.",
            ),
        ],
    }
}

pub(super) fn experience() -> Vec<ExperienceEntry> {
    vec![
        experience_entry(
            ExperienceKind::Work,
            "Senior Cloud Engineer",
            "TechInnovate Solutions",
            "2022 - Present",
            "Leading cloud infrastructure and DevOps initiatives for enterprise clients. \
             Architecting serverless solutions and implementing CI/CD pipelines.",
            &[
                "Reduced cloud infrastructure costs by 35% through optimization and right-sizing",
                "Implemented multi-region high-availability architecture with 99.99% uptime",
                "Led migration of legacy applications to containerized microservices architecture",
                "Mentored junior engineers on cloud best practices and DevOps methodologies",
            ],
            &["AWS", "Terraform", "Kubernetes", "Docker", "CI/CD", "Serverless"],
        ),
        experience_entry(
            ExperienceKind::Work,
            "DevOps Engineer",
            "CloudScale Systems",
            "2020 - 2022",
            "Designed and implemented cloud infrastructure and CI/CD pipelines for SaaS \
             products. Focused on automation, security, and scalability.",
            &[
                "Built automated deployment pipelines reducing release time from days to hours",
                "Implemented infrastructure as code practices using Terraform",
                "Developed monitoring and alerting system with 24/7 coverage",
                "Improved system reliability through chaos engineering practices",
            ],
            &["AWS", "Docker", "Jenkins", "Terraform", "Python", "ELK Stack"],
        ),
        experience_entry(
            ExperienceKind::Work,
            "Frontend Developer",
            "WebFusion Interactive",
            "2018 - 2020",
            "Developed responsive web applications using React and modern JavaScript. \
             Implemented state management solutions and UI component libraries.",
            &[
                "Created reusable component library reducing development time by 40%",
                "Improved application performance by implementing code splitting and lazy loading",
                "Implemented automated testing increasing code coverage to 85%",
                "Contributed to open-source projects and internal knowledge sharing",
            ],
            &["React", "JavaScript", "TypeScript", "Redux", "HTML/CSS", "Jest"],
        ),
        experience_entry(
            ExperienceKind::Education,
            "M.S. in Computer Science",
            "University of Washington",
            "2016 - 2018",
            "Specialized in Cloud Computing and Distributed Systems. Research focus on \
             serverless computing optimization and container orchestration.",
            &[
                "Published research paper on serverless computing performance optimization",
                "Developed a proof-of-concept for auto-scaling containerized applications",
                "Teaching assistant for Advanced Cloud Computing course",
                "Graduated with 3.9 GPA",
            ],
            &[
                "Cloud Computing",
                "Distributed Systems",
                "Algorithms",
                "Machine Learning",
            ],
        ),
        experience_entry(
            ExperienceKind::Education,
            "B.S. in Software Engineering",
            "Oregon State University",
            "2012 - 2016",
            "Comprehensive education in software development methodologies, data structures, \
             algorithms, and systems design.",
            &[
                "Graduated cum laude with 3.7 GPA",
                "Led student software development team for university mobile app",
                "Internship at tech startup developing web applications",
                "Winner of annual hackathon for innovative cloud-based solution",
            ],
            &["Java", "Python", "Web Development", "Databases", "Software Design"],
        ),
    ]
}
