//! Built-in keyword -> category rules.
//!
//! This is configuration data, not logic: an ordered list, matched by
//! substring against the lowercased query. Longest keyword wins; equal
//! lengths are broken by declaration order, so append new rules rather than
//! reshuffling existing ones.

pub(crate) const BUILTIN_RULES: &[(&str, &str)] = &[
    ("pipette", "Pipettes"),
    ("pipettes", "Pipettes"),
    ("fixed volume", "Pipettes"),
    ("variable", "Pipettes"),
    ("dengue", "Elisa"),
    ("ns1", "Elisa"),
    ("hiv", "Elisa"),
    ("hbsag", "Elisa"),
    ("elisa", "Elisa"),
    ("crp", "Turbidimetry"),
    ("turbidimetry", "Turbidimetry"),
    ("rf", "Nephelometry"),
    ("aso", "Nephelometry"),
    ("nephelometry", "Nephelometry"),
    ("control", "Controls"),
    ("control kit", "Controls"),
    ("system pack", "System Packs"),
    ("albumin", "System Packs"),
    ("anti a", "BloodGroup"),
    ("anti b", "BloodGroup"),
    ("anti d", "BloodGroup"),
    ("anti ab", "BloodGroup"),
    ("blood grouping", "BloodGroup"),
    ("reagent", "Reagents"),
    ("reagents", "Reagents"),
    ("meriscreen", "Meriscreen"),
    ("rapid", "Rapids"),
    // Analysers and lab instruments
    ("analyser", "Analyser"),
    ("analyzer", "Analyser"),
    ("hematology", "Analyser"),
    ("hb", "Analyser"),
    ("5 part", "Analyser"),
    ("3 part", "Analyser"),
    ("6 part", "Analyser"),
    ("cbc", "Analyser"),
    ("celquant", "Analyser"),
    ("autoloader", "Analyser"),
    ("cell counter", "Analyser"),
    ("automated analy", "Analyser"),
    ("biochemistry", "Analyser"),
    ("bio chemistry", "Analyser"),
    ("chemistry analy", "Analyser"),
    ("fully automatic biochemistry analyzer", "Analyser"),
    ("semi automatic bio chemistry analyser", "Analyser"),
    ("veterinary biochemistry analyzer", "Analyser"),
    ("elisa reader", "Analyser"),
    ("elisa washer", "Analyser"),
    ("elisa plate washer", "Analyser"),
    ("elisa test", "Analyser"),
    ("immunoassay", "Analyser"),
    ("immunoassay analyzer", "Analyser"),
    ("immunoassay analyzer reagents", "Analyser"),
    ("coagulation", "Analyser"),
    ("coagulation analyzer", "Analyser"),
    ("coagulation analyzer reagents", "Analyser"),
    ("semi automated coagulation analyser", "Analyser"),
    ("electrolyte", "Analyser"),
    ("electrolyte analy", "Analyser"),
    ("electrolyte analyzer", "Analyser"),
    ("electrolyte analyzer reagents", "Analyser"),
    ("biochemistry reagent kit", "Analyser"),
    ("pcr machine", "Analyser"),
    ("real time pcr", "Analyser"),
    ("rt-pcr", "Analyser"),
    ("rtpcr", "Analyser"),
    ("qpcr", "Analyser"),
    ("thermal cycler", "Analyser"),
    ("dna extraction", "Analyser"),
    ("dna extraction system", "Analyser"),
    ("rna extraction", "Analyser"),
    ("gel doc", "Analyser"),
    ("gel documentation system", "Analyser"),
    ("hplc analy", "Analyser"),
    ("hplc system", "Analyser"),
    ("liquid chromatograph", "Analyser"),
    ("poct", "Analyser"),
    ("point of care", "Analyser"),
    ("glucometer", "Analyser"),
    // Endo surgical range
    ("bonewax", "Endo"),
    ("bone wax", "Endo"),
    ("catgut", "Endo"),
    ("chromic catgut", "Endo"),
    ("plain catgut", "Endo"),
    ("suture", "Endo"),
    ("sutures", "Endo"),
    ("suture item", "Endo"),
    ("barbed sutures", "Endo"),
    ("endo", "Endo"),
    ("aspiron", "Endo"),
    ("endoscope", "Endo"),
    ("endoscopes", "Endo"),
    ("endoscopic", "Endo"),
    ("endoscopic equipment", "Endo"),
    ("endoscopic accessories", "Endo"),
    ("endoscopic linear cutter", "Endo"),
    ("trocar", "Endo"),
    ("disposable trocar", "Endo"),
    ("disposable bladeless trocar", "Endo"),
    ("long sleeve trocar", "Endo"),
    ("endocutter", "Endo"),
    ("endo cutter", "Endo"),
    ("power endocutter", "Endo"),
    ("reload linear cutter", "Endo"),
    ("circular stapler", "Endo"),
    ("disposable circular stapler", "Endo"),
    ("hemorrhoid stapler", "Endo"),
    ("disposable hemorrhoid stapler", "Endo"),
    ("skin stapler", "Endo"),
    ("disposable skin stapler", "Endo"),
    ("metal skin stapler", "Endo"),
    ("stapler", "Endo"),
    ("auto linear stapler", "Endo"),
    ("dial linear stapler", "Endo"),
    ("disposable linear cutter", "Endo"),
    ("ligation clip", "Endo"),
    ("v shape ligation clip", "Endo"),
    ("ligating clip", "Endo"),
    ("titanium ligating clip", "Endo"),
    ("fixation device", "Endo"),
    ("powered fixation", "Endo"),
    ("mesh fixation device", "Endo"),
    ("powered tacker", "Endo"),
    ("hernia", "Endo"),
    ("hernia mesh", "Endo"),
    ("herniamesh", "Endo"),
    ("anatomical mesh", "Endo"),
    ("polypropylene mesh", "Endo"),
    ("polyester 3d mesh", "Endo"),
    ("haemostat", "Endo"),
    ("haemostatics", "Endo"),
    ("hemostat", "Endo"),
    ("gelatin sponge", "Endo"),
    ("absorbable gelatin sponge", "Endo"),
    ("absorbable gelatin powder", "Endo"),
    ("oxidised cellulose", "Endo"),
    ("oxidised regenerated cellulose", "Endo"),
    ("oxidized regenerated cellulose", "Endo"),
    ("umbilical cotton tape", "Endo"),
    ("laparoscop", "Endo"),
    ("minimal invasive", "Endo"),
    ("ultrasonic surg", "Endo"),
    ("ultrasonic generator", "Endo"),
    ("ultrasonic scalpel", "Endo"),
    ("hand piece transducer", "Endo"),
    ("surgical system", "Endo"),
    ("diode laser", "Endo"),
    ("laser diode", "Endo"),
    ("laser fiber", "Endo"),
    ("fibre laser", "Endo"),
    ("fiber laser", "Endo"),
    ("laser ablation", "Endo"),
    ("gynaecologist laser hand piece", "Endo"),
    ("robotics", "Endo"),
    ("robot machines", "Endo"),
    ("robot components", "Endo"),
    ("robotic assisted", "Endo"),
    ("robotic surg", "Endo"),
    ("surg robot", "Endo"),
    ("robot for surg", "Endo"),
    ("ras", "Endo"),
    ("joint replace", "Endo"),
    ("knee replace", "Endo"),
    ("tkr robot", "Endo"),
    ("endotracheal tubes", "Endo"),
    ("transducers", "Endo"),
    ("cartridges", "Endo"),
    ("disposable medical item", "Endo"),
    ("medical consumable", "Endo"),
    ("medical item", "Endo"),
    ("intra uterine", "Endo"),
    ("iud", "Endo"),
    ("iucd", "Endo"),
    ("hormonal intrauterine", "Endo"),
    ("anti contraceptive", "Endo"),
    ("contraceptive", "Endo"),
    ("skill lab", "Endo"),
    ("suture practice starter kit", "Endo"),
    ("polyglactine", "Endo"),
    ("polyglactin 910", "Endo"),
    ("polyamide black", "Endo"),
    ("polydioxanone", "Endo"),
    ("polyglycolic acid", "Endo"),
    ("polyglecaprone", "Endo"),
    ("polyglycaprone", "Endo"),
    ("polypropylene blue", "Endo"),
    ("polyester green", "Endo"),
    ("polyester white", "Endo"),
    ("silk black", "Endo"),
    ("round body", "Endo"),
    ("taper cut", "Endo"),
    ("tapercut", "Endo"),
    ("reverse cutting", "Endo"),
    ("blunt point", "Endo"),
    ("pledgets", "Endo"),
    ("ptfe pledget", "Endo"),
    ("pacing wire", "Endo"),
    ("mvr kit", "Endo"),
    ("avr kit", "Endo"),
    ("cabg kit", "Endo"),
    ("liver transplant kit", "Endo"),
    ("clutch tourniquet device", "Endo"),
    ("topical skin adhesive glue", "Endo"),
    ("disposable pph", "Endo"),
];
