#[derive(Debug, Clone, Copy)]
pub struct BehaviorDef {
    pub competency: &'static str,
    pub behaviors: &'static [&'static str],
}

const TECHNICAL_KNOWLEDGE: &[&str] = &[];
const GROW_BUSINESS: &[&str] = &[
    "Emprender, buscar y encontrar opciones mejores",
    "Hacer crecer el negocio",
    "Cumplir objetivos en el largo plazo",
    "Tomar decisiones",
    "Priorizar y decidir con velocidad",
    "Aplicar pensamiento estratégico y crear planes de negocio versátiles",
    "Usar datos para tomar decisiones",
];
const DEVELOP_OTHERS: &[&str] = &[
    "Desarrollar conocimiento y nuevas habilidades",
    "Nutrir el talento",
    "Hacer crecer a los demás",
    "Estar disponible y accesible",
    "Hacer mentoring/coaching para maximizar el desempeño de los demás",
    "Asegurar la sucesión",
];
const NAVIGATE_UNKNOWN: &[&str] = &[
    "Buscar oportunidades y actuar",
    "Cuidar de la salud y el bienestar para conseguir un negocio sostenible",
    "Equilibrar la carga de trabajo",
    "Agradecer y celebrar con el equipo",
];
const DELIVER_RESULTS: &[&str] = &[
    "Conseguir objetivos",
    "Pasión por los clientes y la decoración en el hogar",
    "Aplicar datos en el trabajo diario",
    "Simplificar y reducir costes, residuos y recursos para generar beneficios",
    "Hacer cumplir a los demás compromisos adquiridos",
    "Reconocer talentos",
    "Usar y hacer crecer el talento",
];
const COMMUNICATE_IMPACT: &[&str] = &[
    "Comunicar de forma directa e inspiradora",
    "Dialogar con los demás",
    "Influir y hacer que las cosas sucedan",
    "Hacer que los demás entiendan su contribución en las estrategias de negocio",
];
const COLLABORATE: &[&str] = &[
    "Crear equipos de alto rendimiento",
    "Hacer colaborar diferentes equipos, funciones, niveles, identidades y entornos",
];
const LEAD_BY_EXAMPLE: &[&str] = &[
    "Hacer que los demás lideren",
    "Hacer que la cultura y los valores sean parte del desempeño",
];

const BUILTIN_BEHAVIORS: &[BehaviorDef] = &[
    BehaviorDef {
        competency: "Conocimientos técnicos",
        behaviors: TECHNICAL_KNOWLEDGE,
    },
    BehaviorDef {
        competency: "Desarrollar nuestro negocio",
        behaviors: GROW_BUSINESS,
    },
    BehaviorDef {
        competency: "Desarrollarse y contribuir al desarrollo de otr@s",
        behaviors: DEVELOP_OTHERS,
    },
    BehaviorDef {
        competency: "Navegar en lo desconocido",
        behaviors: NAVIGATE_UNKNOWN,
    },
    BehaviorDef {
        competency: "Generar resultados",
        behaviors: DELIVER_RESULTS,
    },
    BehaviorDef {
        competency: "Comunicar con impacto",
        behaviors: COMMUNICATE_IMPACT,
    },
    BehaviorDef {
        competency: "Colaborar y co-crear",
        behaviors: COLLABORATE,
    },
    BehaviorDef {
        competency: "Liderar con el ejemplo",
        behaviors: LEAD_BY_EXAMPLE,
    },
];

pub fn builtin_behaviors() -> &'static [BehaviorDef] {
    BUILTIN_BEHAVIORS
}
