//! Compiled-in liturgical text for every section.

use crate::model::Section;

/// Title of the initium part after which personal intentions are read.
pub const OFFERTORY_TITLE: &str = "Offertorium Rosarii";

/// A single prayer or meditation with Latin and vernacular text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub title: &'static str,
    pub latin: &'static str,
    pub vernacular: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub latin: &'static str,
    /// Mysteries for mystery sections, otherwise the prayers shown at once.
    pub parts: &'static [Part],
}

impl SectionContent {
    /// Part shown for a mystery section at the given sub-section index.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<&'static Part> {
        self.parts.get(index)
    }
}

const SIGNUM_CRUCIS: Part = Part {
    title: "Signum Crucis",
    latin: "In nomine Patris, et Filii, et Spiritus Sancti. Amen.",
    vernacular: "In the name of the Father, and of the Son, and of the Holy Spirit. Amen.",
};

const CREDO: Part = Part {
    title: "Symbolum Apostolorum",
    latin: "Credo in Deum, Patrem omnipotentem, Creatorem caeli et terrae. \
            Et in Iesum Christum, Filium eius unicum, Dominum nostrum, \
            qui conceptus est de Spiritu Sancto, natus ex Maria Virgine, \
            passus sub Pontio Pilato, crucifixus, mortuus, et sepultus, \
            descendit ad inferos, tertia die resurrexit a mortuis, \
            ascendit ad caelos, sedet ad dexteram Dei Patris omnipotentis, \
            inde venturus est iudicare vivos et mortuos. \
            Credo in Spiritum Sanctum, sanctam Ecclesiam catholicam, \
            sanctorum communionem, remissionem peccatorum, \
            carnis resurrectionem, vitam aeternam. Amen.",
    vernacular: "I believe in God, the Father almighty, Creator of heaven and earth, \
                 and in Jesus Christ, his only Son, our Lord, \
                 who was conceived by the Holy Spirit, born of the Virgin Mary, \
                 suffered under Pontius Pilate, was crucified, died and was buried; \
                 he descended into hell; on the third day he rose again from the dead; \
                 he ascended into heaven, and is seated at the right hand of God the Father almighty; \
                 from there he will come to judge the living and the dead. \
                 I believe in the Holy Spirit, the holy catholic Church, \
                 the communion of saints, the forgiveness of sins, \
                 the resurrection of the body, and life everlasting. Amen.",
};

const PATER_NOSTER: Part = Part {
    title: "Pater Noster",
    latin: "Pater noster, qui es in caelis, sanctificetur nomen tuum. \
            Adveniat regnum tuum. Fiat voluntas tua, sicut in caelo et in terra. \
            Panem nostrum quotidianum da nobis hodie, \
            et dimitte nobis debita nostra sicut et nos dimittimus debitoribus nostris. \
            Et ne nos inducas in tentationem, sed libera nos a malo. Amen.",
    vernacular: "Our Father, who art in heaven, hallowed be thy name; \
                 thy kingdom come; thy will be done on earth as it is in heaven. \
                 Give us this day our daily bread; \
                 and forgive us our trespasses as we forgive those who trespass against us; \
                 and lead us not into temptation, but deliver us from evil. Amen.",
};

const AVE_MARIA: Part = Part {
    title: "Ave Maria",
    latin: "Ave Maria, gratia plena, Dominus tecum. \
            Benedicta tu in mulieribus, et benedictus fructus ventris tui, Iesus. \
            Sancta Maria, Mater Dei, ora pro nobis peccatoribus, \
            nunc et in hora mortis nostrae. Amen.",
    vernacular: "Hail Mary, full of grace, the Lord is with thee. \
                 Blessed art thou among women, and blessed is the fruit of thy womb, Jesus. \
                 Holy Mary, Mother of God, pray for us sinners, \
                 now and at the hour of our death. Amen.",
};

const AVE_MARIA_TER: Part = Part {
    title: "Ave Maria (ter)",
    latin: AVE_MARIA.latin,
    vernacular: AVE_MARIA.vernacular,
};

const AVE_MARIA_DECIES: Part = Part {
    title: "Ave Maria (decies)",
    latin: AVE_MARIA.latin,
    vernacular: AVE_MARIA.vernacular,
};

const GLORIA_PATRI: Part = Part {
    title: "Gloria Patri",
    latin: "Gloria Patri, et Filio, et Spiritui Sancto. \
            Sicut erat in principio, et nunc et semper, et in saecula saeculorum. Amen.",
    vernacular: "Glory be to the Father, and to the Son, and to the Holy Spirit, \
                 as it was in the beginning, is now, and ever shall be, world without end. Amen.",
};

const ORATIO_FATIMAE: Part = Part {
    title: "Oratio Fatimae",
    latin: "O mi Iesu, dimitte nobis debita nostra, libera nos ab igne inferiori, \
            perduc in caelum omnes animas, praesertim illas quae maxime indigent misericordia tua.",
    vernacular: "O my Jesus, forgive us our sins, save us from the fires of hell, \
                 lead all souls to heaven, especially those in most need of thy mercy.",
};

const OFFERTORIUM: Part = Part {
    title: OFFERTORY_TITLE,
    latin: "Suscipe, Domina, hoc Rosarium quod tibi offerimus, \
            et per manus tuas illud Filio tuo praesenta, \
            pro intentionibus quas in corde gerimus.",
    vernacular: "Receive, O Lady, this Rosary which we offer to you, \
                 and through your hands present it to your Son, \
                 for the intentions we carry in our hearts.",
};

const SALVE_REGINA: Part = Part {
    title: "Salve Regina",
    latin: "Salve, Regina, Mater misericordiae, vita, dulcedo, et spes nostra, salve. \
            Ad te clamamus exsules filii Hevae. \
            Ad te suspiramus, gementes et flentes in hac lacrimarum valle. \
            Eia, ergo, advocata nostra, illos tuos misericordes oculos ad nos converte. \
            Et Iesum, benedictum fructum ventris tui, nobis post hoc exsilium ostende. \
            O clemens, O pia, O dulcis Virgo Maria.",
    vernacular: "Hail, holy Queen, Mother of mercy, our life, our sweetness and our hope. \
                 To thee do we cry, poor banished children of Eve. \
                 To thee do we send up our sighs, mourning and weeping in this valley of tears. \
                 Turn then, most gracious advocate, thine eyes of mercy toward us, \
                 and after this our exile show unto us the blessed fruit of thy womb, Jesus. \
                 O clement, O loving, O sweet Virgin Mary.",
};

const ORATIO_FINALIS: Part = Part {
    title: "Oratio",
    latin: "Ora pro nobis, sancta Dei Genetrix. \
            Ut digni efficiamur promissionibus Christi. \
            Oremus. Deus, cuius Unigenitus per vitam, mortem et resurrectionem suam \
            nobis salutis aeternae praemia comparavit: concede, quaesumus, \
            ut haec mysteria sacratissimo beatae Mariae Virginis Rosario recolentes, \
            et imitemur quod continent, et quod promittunt assequamur. \
            Per eundem Christum Dominum nostrum. Amen.",
    vernacular: "Pray for us, O holy Mother of God, \
                 that we may be made worthy of the promises of Christ. \
                 Let us pray. O God, whose only begotten Son, by his life, death and resurrection, \
                 has purchased for us the rewards of eternal life, grant, we beseech thee, \
                 that meditating upon these mysteries of the most holy Rosary of the Blessed Virgin Mary, \
                 we may imitate what they contain and obtain what they promise. \
                 Through the same Christ our Lord. Amen.",
};

/// Prayers said within every decade, after the mystery is announced.
pub const DECADE_PRAYERS: [Part; 4] = [PATER_NOSTER, AVE_MARIA_DECIES, GLORIA_PATRI, ORATIO_FATIMAE];

const INITIUM_PARTS: [Part; 7] = [
    SIGNUM_CRUCIS,
    OFFERTORIUM,
    CREDO,
    PATER_NOSTER,
    AVE_MARIA_TER,
    GLORIA_PATRI,
    ORATIO_FATIMAE,
];

const GAUDIOSA_PARTS: [Part; 5] = [
    Part {
        title: "Annuntiatio",
        latin: "Primum mysterium gaudiosum: Annuntiatio Domini.",
        vernacular: "The first joyful mystery: the Annunciation of the Lord.",
    },
    Part {
        title: "Visitatio",
        latin: "Secundum mysterium gaudiosum: Visitatio Beatae Mariae Virginis.",
        vernacular: "The second joyful mystery: the Visitation of the Blessed Virgin Mary.",
    },
    Part {
        title: "Nativitas",
        latin: "Tertium mysterium gaudiosum: Nativitas Domini.",
        vernacular: "The third joyful mystery: the Nativity of the Lord.",
    },
    Part {
        title: "Praesentatio",
        latin: "Quartum mysterium gaudiosum: Praesentatio Domini in Templo.",
        vernacular: "The fourth joyful mystery: the Presentation of the Lord in the Temple.",
    },
    Part {
        title: "Inventio in Templo",
        latin: "Quintum mysterium gaudiosum: Inventio Pueri Iesu in Templo.",
        vernacular: "The fifth joyful mystery: the Finding of the Child Jesus in the Temple.",
    },
];

const DOLOROSA_PARTS: [Part; 5] = [
    Part {
        title: "Agonia in Horto",
        latin: "Primum mysterium dolorosum: Agonia Domini in Horto.",
        vernacular: "The first sorrowful mystery: the Agony in the Garden.",
    },
    Part {
        title: "Flagellatio",
        latin: "Secundum mysterium dolorosum: Flagellatio Domini.",
        vernacular: "The second sorrowful mystery: the Scourging at the Pillar.",
    },
    Part {
        title: "Coronatio Spinis",
        latin: "Tertium mysterium dolorosum: Coronatio Spinis.",
        vernacular: "The third sorrowful mystery: the Crowning with Thorns.",
    },
    Part {
        title: "Baiulatio Crucis",
        latin: "Quartum mysterium dolorosum: Baiulatio Crucis.",
        vernacular: "The fourth sorrowful mystery: the Carrying of the Cross.",
    },
    Part {
        title: "Crucifixio",
        latin: "Quintum mysterium dolorosum: Crucifixio et Mors Domini.",
        vernacular: "The fifth sorrowful mystery: the Crucifixion and Death of the Lord.",
    },
];

const GLORIOSA_PARTS: [Part; 5] = [
    Part {
        title: "Resurrectio",
        latin: "Primum mysterium gloriosum: Resurrectio Domini.",
        vernacular: "The first glorious mystery: the Resurrection of the Lord.",
    },
    Part {
        title: "Ascensio",
        latin: "Secundum mysterium gloriosum: Ascensio Domini.",
        vernacular: "The second glorious mystery: the Ascension of the Lord.",
    },
    Part {
        title: "Descensus Spiritus Sancti",
        latin: "Tertium mysterium gloriosum: Descensus Spiritus Sancti.",
        vernacular: "The third glorious mystery: the Descent of the Holy Spirit.",
    },
    Part {
        title: "Assumptio",
        latin: "Quartum mysterium gloriosum: Assumptio Beatae Mariae Virginis.",
        vernacular: "The fourth glorious mystery: the Assumption of the Blessed Virgin Mary.",
    },
    Part {
        title: "Coronatio Beatae Mariae Virginis",
        latin: "Quintum mysterium gloriosum: Coronatio Beatae Mariae Virginis.",
        vernacular: "The fifth glorious mystery: the Coronation of the Blessed Virgin Mary.",
    },
];

const ULTIMA_PARTS: [Part; 2] = [SALVE_REGINA, ORATIO_FINALIS];

static CONTENT: [SectionContent; 5] = [
    SectionContent {
        section: Section::Initium,
        title: "Initium",
        subtitle: "Opening prayers",
        latin: "Signum Crucis • Credo",
        parts: &INITIUM_PARTS,
    },
    SectionContent {
        section: Section::Gaudiosa,
        title: "Mysteria Gaudiosa",
        subtitle: "Joyful Mysteries",
        latin: "Mysteria Gaudiosa",
        parts: &GAUDIOSA_PARTS,
    },
    SectionContent {
        section: Section::Dolorosa,
        title: "Mysteria Dolorosa",
        subtitle: "Sorrowful Mysteries",
        latin: "Mysteria Dolorosa",
        parts: &DOLOROSA_PARTS,
    },
    SectionContent {
        section: Section::Gloriosa,
        title: "Mysteria Gloriosa",
        subtitle: "Glorious Mysteries",
        latin: "Mysteria Gloriosa",
        parts: &GLORIOSA_PARTS,
    },
    SectionContent {
        section: Section::Ultima,
        title: "Ultima Oratio",
        subtitle: "Closing prayers",
        latin: "Salve Regina",
        parts: &ULTIMA_PARTS,
    },
];

#[must_use]
pub fn content_for(section: Section) -> &'static SectionContent {
    &CONTENT[section.position()]
}
