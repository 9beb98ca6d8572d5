//! Repository pattern for database operations.
//!
//! 데이터베이스 접근 로직을 라우트 핸들러에서 분리하여 관리합니다.
//! 모든 Repository는 static methods 패턴을 사용하며, 쓰기 연산은
//! 핸들러가 연 요청 단위 트랜잭션 안에서 실행될 수 있도록
//! `PgExecutor`를 받습니다.

pub mod catalogue;
pub mod dossiers;
pub mod factures;
pub mod patients;
pub mod rdv;
pub mod staff;
pub mod users;
pub mod visites;

pub use catalogue::{
    ActeRecord, CatalogueRecord, CatalogueRepository, NewActe, NewCatalogue, NewTarif, TarifRecord,
};
pub use dossiers::{
    DossierRecord, DossierRepository, MedicamentRecord, NewDossier, NewMedicament, NewOrdonnance,
    NewPrescriptionMed, OrdonnanceRecord, PrescriptionMedRecord,
};
pub use factures::{FactureRecord, FactureRepository, NewFacture};
pub use patients::{NewPatient, PatientRecord, PatientRepository};
pub use rdv::{NewRdv, RdvRecord, RdvRepository};
pub use staff::{
    EmployeeRecord, MedecinRecord, NewEmployee, NewMedecin, StaffRepository,
};
pub use users::{NewUser, UserAuthRecord, UserRecord, UserRepository};
pub use visites::{NewVisite, VisiteRecord, VisiteRepository};
